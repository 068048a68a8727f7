//! Source adapter over the package-database root directory.

use anyhow::Result;
use std::path::Path;

use crate::runtime::Runtime;

/// Housekeeping entries living next to the per-package directories.
/// They are part of the database, not installed packages.
pub const RESERVED_ENTRIES: [&str; 3] = ["pkgdb.byfile.db", ".cookie", "pkg-vulnerabilities"];

/// List the installed package names under `root`, in directory
/// enumeration order.
///
/// Skips `.`, `..`, the reserved housekeeping entries, and anything
/// that is not a directory.
#[tracing::instrument(skip(runtime))]
pub fn installed_package_names<R: Runtime>(runtime: &R, root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in runtime.read_dir(root)? {
        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name == "." || name == ".." {
            continue;
        }
        if RESERVED_ENTRIES.contains(&name) {
            continue;
        }
        if !runtime.is_dir(&entry) {
            continue;
        }
        names.push(name.to_string());
    }

    Ok(names)
}

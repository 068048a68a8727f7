//! Source adapter over a local directory of binary package archives.

use anyhow::Result;
use std::path::Path;

use crate::runtime::Runtime;

/// Check whether `name` looks like a binary package archive.
///
/// The suffix must be exactly `.tgz` or `.tbz` (case-sensitive) with at
/// least one byte of package name in front of it.
pub fn is_archive_name(name: &str) -> bool {
    name.len() >= 5 && (name.ends_with(".tgz") || name.ends_with(".tbz"))
}

/// List the archive file names in `dir`, in directory enumeration order.
///
/// Only regular files with an archive suffix are yielded; anything else
/// (subdirectories, stray files, non-UTF-8 names) is skipped.
#[tracing::instrument(skip(runtime))]
pub fn archive_file_names<R: Runtime>(runtime: &R, dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in runtime.read_dir(dir)? {
        if !runtime.is_file(&entry) {
            continue;
        }
        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_archive_name(name) {
            continue;
        }
        names.push(name.to_string());
    }

    Ok(names)
}

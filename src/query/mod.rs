//! Aggregation operations over the package database and local archive
//! directories.
//!
//! Every operation follows the same shape: enumerate candidates through
//! a source adapter, drive them through [`crate::iterate::visit_entries`]
//! with a match strategy, and hand the aggregated result back to the
//! caller.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::iterate::visit_entries;
use crate::matching::{BestMatch, CandidateOrder, GlobMatcher, PatternMatcher, matches_basename};
use crate::runtime::Runtime;
use crate::source::{archive_file_names, installed_package_names};

/// Environment variable overriding the package-database root.
pub const DB_ROOT_ENV: &str = "PKG_DBDIR";

/// Package-database root used when [`DB_ROOT_ENV`] is not set.
pub const DEFAULT_DB_ROOT: &str = "/var/db/pkg";

/// Resolve the package-database root from the environment, falling back
/// to [`DEFAULT_DB_ROOT`].
pub fn default_db_root<R: Runtime>(runtime: &R) -> PathBuf {
    match runtime.env_var(DB_ROOT_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DB_ROOT),
    }
}

/// Query interface over an installed-package database.
///
/// Owns nothing but the root path; each operation enumerates the
/// database afresh, so the directory is only touched for the duration
/// of a single call.
pub struct PkgDb<'a, R: Runtime, M: PatternMatcher = GlobMatcher> {
    runtime: &'a R,
    root: PathBuf,
    matcher: M,
}

impl<'a, R: Runtime> PkgDb<'a, R> {
    /// Create a database view rooted at `root`, matching patterns with
    /// the default glob matcher.
    pub fn new(runtime: &'a R, root: PathBuf) -> Self {
        Self {
            runtime,
            root,
            matcher: GlobMatcher,
        }
    }

    /// Create a database view rooted at the environment-resolved
    /// default location.
    pub fn open_default(runtime: &'a R) -> Self {
        let root = default_db_root(runtime);
        Self::new(runtime, root)
    }
}

impl<'a, R: Runtime, M: PatternMatcher> PkgDb<'a, R, M> {
    /// Create a database view with a caller-supplied pattern matcher.
    pub fn with_matcher(runtime: &'a R, root: PathBuf, matcher: M) -> Self {
        Self {
            runtime,
            root,
            matcher,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn installed(&self) -> Result<Vec<String>> {
        installed_package_names(self.runtime, &self.root)
            .with_context(|| format!("Could not process package database at {:?}", self.root))
    }

    /// Append every installed package with the given basename to
    /// `found`, in database enumeration order.
    ///
    /// Returns whether at least one package matched.
    #[tracing::instrument(skip(self, found))]
    pub fn collect_by_basename(&self, pkgbase: &str, found: &mut Vec<String>) -> Result<bool> {
        self.collect(found, |pkg| Ok(matches_basename(pkgbase, pkg)))
    }

    /// Append every installed package matching `pattern` to `found`,
    /// in database enumeration order.
    ///
    /// Returns whether at least one package matched.
    #[tracing::instrument(skip(self, found))]
    pub fn collect_by_pattern(&self, pattern: &str, found: &mut Vec<String>) -> Result<bool> {
        self.collect(found, |pkg| self.matcher.matches(pattern, pkg))
    }

    fn collect<F>(&self, found: &mut Vec<String>, mut is_match: F) -> Result<bool>
    where
        F: FnMut(&str) -> Result<bool>,
    {
        let mut got_match = false;

        visit_entries::<_, _, ()>(self.installed()?, |pkg| {
            if is_match(pkg)? {
                got_match = true;
                found.push(pkg.to_string());
            }
            Ok(None)
        })?;

        Ok(got_match)
    }

    /// Return the name of the best installed package matching `pattern`
    /// under the supplied ordering, or `None` if nothing matched.
    #[tracing::instrument(skip(self, order))]
    pub fn find_best_match<O: CandidateOrder>(
        &self,
        order: &O,
        pattern: &str,
    ) -> Result<Option<String>> {
        let mut best = BestMatch::new();

        visit_entries::<_, _, ()>(self.installed()?, |pkg| {
            best.consider(order, pattern, pkg)?;
            Ok(None)
        })?;

        Ok(best.into_best())
    }

    /// Invoke `callback` for every installed package matching `pattern`.
    ///
    /// Iteration stops at the first `Ok(Some(value))` from the callback
    /// and that value is returned; `Ok(None)` means the whole database
    /// was visited without a stop.
    #[tracing::instrument(skip(self, callback))]
    pub fn for_each_match<F, T>(&self, pattern: &str, mut callback: F) -> Result<Option<T>>
    where
        F: FnMut(&str) -> Result<Option<T>>,
    {
        visit_entries(self.installed()?, |pkg| {
            if self.matcher.matches(pattern, pkg)? {
                callback(pkg)
            } else {
                Ok(None)
            }
        })
    }
}

/// Invoke `callback` for every binary package archive in `dir`, with
/// the same early-stop contract as [`PkgDb::for_each_match`].
#[tracing::instrument(skip(runtime, callback))]
pub fn for_each_archive<R, F, T>(runtime: &R, dir: &Path, mut callback: F) -> Result<Option<T>>
where
    R: Runtime,
    F: FnMut(&str) -> Result<Option<T>>,
{
    let entries = archive_file_names(runtime, dir)
        .with_context(|| format!("Could not process package directory {:?}", dir))?;
    visit_entries(entries, |name| callback(name))
}

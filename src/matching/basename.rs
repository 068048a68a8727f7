//! Exact-basename matching.
//!
//! A full package name is `<basename>-<version>`; the version separator
//! is the *last* `-`, so `foo-bar-1.0` has basename `foo-bar`.

/// Split a full package name into (basename, version) at the last `-`.
///
/// Returns `None` for names without a version separator.
pub fn split_version(pkg: &str) -> Option<(&str, &str)> {
    let idx = pkg.rfind('-')?;
    Some((&pkg[..idx], &pkg[idx + 1..]))
}

/// Check whether the full package name `pkg` has exactly the basename
/// `pkgbase`.
///
/// The comparison is over the whole basename, so `foo` does not match
/// `foobar-1.0`. A database entry without a version separator is
/// malformed; it is reported and treated as a non-match so traversal
/// can continue.
pub fn matches_basename(pkgbase: &str, pkg: &str) -> bool {
    match split_version(pkg) {
        Some((base, _version)) => base == pkgbase,
        None => {
            log::warn!("Entry {} in the package database is not a valid package name", pkg);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_version_at_last_dash() {
        assert_eq!(split_version("foo-1.0"), Some(("foo", "1.0")));
        assert_eq!(split_version("foo-bar-1.0"), Some(("foo-bar", "1.0")));
        assert_eq!(split_version("a-b-c-2.3nb1"), Some(("a-b-c", "2.3nb1")));
    }

    #[test]
    fn test_split_version_missing_separator() {
        assert_eq!(split_version("foo"), None);
        assert_eq!(split_version(""), None);
    }

    #[test]
    fn test_matches_basename_exact() {
        assert!(matches_basename("foo", "foo-1.0"));
        assert!(matches_basename("foo-bar", "foo-bar-1.0"));
    }

    #[test]
    fn test_matches_basename_rejects_prefix() {
        // A plain prefix is not a basename match
        assert!(!matches_basename("foo", "foobar-1.0"));
        assert!(!matches_basename("foo", "foo-bar-1.0"));
        assert!(!matches_basename("foobar", "foo-1.0"));
    }

    #[test]
    fn test_matches_basename_malformed_entry() {
        // No separator: reported and skipped, never a match
        assert!(!matches_basename("foo", "foo"));
    }
}

//! Delegated pattern matching.

use anyhow::{Context, Result};

/// Matches full package names against a pattern.
///
/// The pattern syntax belongs to the implementation; this crate only
/// relies on the boolean verdict. A failing matcher (for example an
/// unparseable pattern) aborts the traversal that uses it.
pub trait PatternMatcher {
    fn matches(&self, pattern: &str, pkg: &str) -> Result<bool>;
}

/// Default matcher backed by shell-style glob patterns.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobMatcher;

impl PatternMatcher for GlobMatcher {
    fn matches(&self, pattern: &str, pkg: &str) -> Result<bool> {
        let pattern = glob::Pattern::new(pattern)
            .with_context(|| format!("Invalid package pattern {:?}", pattern))?;
        Ok(pattern.matches(pkg))
    }
}

//! Match strategies applied to candidate names during traversal.
//!
//! - `basename` - exact match on the package identifier before the
//!   trailing version suffix
//! - `pattern` - delegated pattern matching ([`PatternMatcher`], with a
//!   glob-backed default)
//! - `order` - best-match selection via an external three-way ordering

mod basename;
mod order;
mod pattern;

pub use basename::{matches_basename, split_version};
pub use order::{BestMatch, CandidateOrder, Preference};
pub use pattern::{GlobMatcher, PatternMatcher};

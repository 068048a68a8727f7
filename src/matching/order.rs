//! Best-match selection.
//!
//! Version-ordering semantics live outside this crate: callers supply a
//! [`CandidateOrder`] and [`BestMatch`] folds a stream of candidates
//! into the single preferred one.

use anyhow::Result;

/// Verdict of comparing a candidate against the current best match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// The candidate does not match the pattern at all.
    NoMatch,
    /// The candidate is strictly better and becomes the new best.
    Candidate,
    /// The candidate matches but the existing best is preferred.
    Incumbent,
}

/// Three-way ordering over pattern matches.
///
/// `incumbent` is `None` while no candidate has matched yet; a matching
/// candidate must then be reported as [`Preference::Candidate`].
pub trait CandidateOrder {
    fn order(
        &self,
        pattern: &str,
        candidate: &str,
        incumbent: Option<&str>,
    ) -> Result<Preference>;
}

impl<F> CandidateOrder for F
where
    F: Fn(&str, &str, Option<&str>) -> Result<Preference>,
{
    fn order(
        &self,
        pattern: &str,
        candidate: &str,
        incumbent: Option<&str>,
    ) -> Result<Preference> {
        self(pattern, candidate, incumbent)
    }
}

/// Accumulator holding the best candidate seen so far.
///
/// Holds at most one name at any time; a better candidate replaces the
/// previous one wholesale.
#[derive(Debug, Default)]
pub struct BestMatch {
    best: Option<String>,
}

impl BestMatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one candidate into the accumulator.
    ///
    /// An ordering failure is fatal to the surrounding traversal and
    /// leaves the accumulator unchanged.
    pub fn consider<O: CandidateOrder>(
        &mut self,
        order: &O,
        pattern: &str,
        candidate: &str,
    ) -> Result<()> {
        match order.order(pattern, candidate, self.best.as_deref())? {
            Preference::NoMatch | Preference::Incumbent => {}
            Preference::Candidate => self.best = Some(candidate.to_string()),
        }
        Ok(())
    }

    /// The current best candidate, if any.
    pub fn best(&self) -> Option<&str> {
        self.best.as_deref()
    }

    /// Consume the accumulator, transferring the best candidate to the
    /// caller.
    pub fn into_best(self) -> Option<String> {
        self.best
    }
}

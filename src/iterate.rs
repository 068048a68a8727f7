//! Generic iterate-and-match driver.
//!
//! Every traversal in this crate is a configuration of [`visit_entries`]:
//! a source of candidate names is pulled entry by entry and each entry is
//! fed to a visitor, which decides whether to keep going or stop with a
//! value.

use anyhow::Result;

/// Drive `visit` over every entry produced by `entries`.
///
/// Returns `Ok(Some(value))` as soon as the visitor produces a value
/// (early stop; no further entries are consulted), `Ok(None)` if the
/// source is exhausted without a stop, and the visitor's error if it
/// fails. Allocates nothing of its own.
pub fn visit_entries<I, F, T>(entries: I, mut visit: F) -> Result<Option<T>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: FnMut(&str) -> Result<Option<T>>,
{
    for entry in entries {
        if let Some(value) = visit(entry.as_ref())? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

//! Directory source adapters.
//!
//! Each adapter turns a directory listing into a sequence of candidate
//! names for the generic driver in [`crate::iterate`], filtering out
//! entries that are not candidates at all.

mod archive;
mod db;

pub use archive::{archive_file_names, is_archive_name};
pub use db::{RESERVED_ENTRIES, installed_package_names};

//! Extension Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An extension error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Both are terminal "not found" conditions for the host to show the user.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No catalog entry has the requested identifier.
    #[display("no title with id '{_0}' exists")]
    TitleNotFound(#[error(not(source))] String),
    /// The title exists, but none of its chapters has the requested identifier.
    #[display("no chapter with id '{chapter_id}' exists in title '{title_id}'")]
    ChapterNotFound {
        /// The title that was found.
        title_id: String,
        /// The chapter that was not.
        chapter_id: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The catalog never changes, so a failed lookup fails forever.
        false
    }
}

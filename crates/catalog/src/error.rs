//! Catalog Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bundled data file was not embedded into the binary.
    #[display("bundled asset not found: {_0}")]
    AssetNotFound(#[error(not(source))] String),
    /// The data file could not be read from disk.
    #[display("could not read catalog data")]
    Io,
    /// The data file is not a JSON array of title records.
    #[display("invalid catalog data")]
    InvalidData,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The catalog is static data; reading it again gives the same answer.
        false
    }
}

//! CLI Error Types

use derive_more::{Display, Error};

/// A CLI error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for CLI commands.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration or catalog could not be loaded.
    #[display("could not start the extension")]
    Startup,
    /// The extension rejected the request (e.g. unknown title).
    #[display("request failed")]
    Request,
    /// Writing the response to stdout failed.
    #[display("could not write output")]
    Output,
}

//! Error types for console I/O.

use thiserror::Error;

/// Errors that end a console session. None of these are recoverable.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the underlying stream failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end-of-file.
    #[error("Console input closed")]
    Closed,
}

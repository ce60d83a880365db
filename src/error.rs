//! Error types for qrbatch operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using qrbatch's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrbatch operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input URL list does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Failed to read a line from the input URL list
    #[error("Failed to read input line {line}: {source}")]
    InputRead {
        /// 1-based line number that failed to read
        line: usize,
        /// Underlying I/O error (includes invalid UTF-8)
        #[source]
        source: std::io::Error,
    },

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Vector serialization failed
    #[error("Failed to render {kind}: {reason}")]
    Render {
        /// Encoder kind that failed (svg/eps/pdf)
        kind: &'static str,
        /// Failure detail
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Self {
        Error::Io(e.error)
    }
}

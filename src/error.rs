//! Error types for tally.

use thiserror::Error;

/// All errors that tally can produce.
#[derive(Error, Debug)]
pub enum TallyError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The habit store could not be read or written.
    #[error("Storage error: {0}")]
    Store(String),

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A named item does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// A caller-supplied parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A stored habit entry is malformed and cannot be used for analytics.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

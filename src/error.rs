//! Error types for the logging facade
//!
//! Logging calls themselves never fail. These errors only surface from the
//! fallible dump helpers and from level parsing.

use thiserror::Error;

/// Result type alias for the facade
pub type Result<T> = std::result::Result<T, LogError>;

/// Errors produced by the facade's fallible helpers
#[derive(Error, Debug)]
pub enum LogError {
    /// A value could not be encoded as JSON for a dump
    #[error("DumpJSON: unable to marshal input: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Raw bytes could not be decoded as JSON for a dump
    #[error("DumpUnmarshaled: unable to unmarshal input: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// Unknown level name
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for tparse.

use thiserror::Error;

/// Errors that can occur while parsing text or building a Things payload.
#[derive(Error, Debug)]
pub enum TparseError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record was constructed without a single recognized attribute.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The line splitter produced a fragment no sigil accounts for.
    ///
    /// Only reachable through a misconfigured delimiter table.
    #[error("Tokenizer consistency failure: {0}")]
    Tokenizer(String),

    /// A date supplied on the command line could not be understood.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Opening the callback URL failed.
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// The operation is not available on this platform.
    #[error("Not supported: {0}")]
    NotSupported(String),
}

impl TparseError {
    /// Build a [`TparseError::InvalidParams`] naming the record kind.
    #[must_use]
    pub fn no_valid_attributes(kind: &str) -> Self {
        Self::InvalidParams(format!("no valid attributes for {kind}"))
    }
}

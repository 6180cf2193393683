//! Error types for Shelf core operations.
//!
//! Every fallible core operation returns a typed [`ShelfError`]. None of them
//! are fatal: the CLI layer maps them to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The persisted collection exists but could not be read back.
    #[error("Failed to load collection: {0}")]
    LoadParse(String),

    /// No entry matched the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data validation error (empty name, unknown rating, bad date, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// The collection could not be encoded for storage
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ShelfError {
    /// Whether this error came from reading the persisted collection.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, ShelfError::LoadParse(_))
    }
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Serialization(err.to_string())
    }
}

//! Error types for the library API.

use thiserror::Error;

/// Errors related to the prompt store (file access, configuration, input, etc.).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Form input rejected before reaching the store.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The configuration file could not be read or understood.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The key/value backend refused a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// An underlying file I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize data.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

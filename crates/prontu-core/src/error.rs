//! Error types for prontu-core

use thiserror::Error;

/// Result type alias using prontu-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prontu-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local profile storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

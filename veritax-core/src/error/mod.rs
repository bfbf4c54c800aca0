//! Core error types for Veritax

use thiserror::Error;

/// Main error type for Veritax operations
#[derive(Error, Debug)]
pub enum VeritaxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Taxonomy integrity error: no parent recorded for taxid '{0}'")]
    GraphIntegrity(String),

    #[error("Taxonomy cycle detected at taxid '{0}'")]
    Cycle(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for Veritax operations
pub type VeritaxResult<T> = Result<T, VeritaxError>;

// Conversion implementations for common error types
impl From<serde_json::Error> for VeritaxError {
    fn from(err: serde_json::Error) -> Self {
        VeritaxError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for VeritaxError {
    fn from(err: anyhow::Error) -> Self {
        VeritaxError::Other(err.to_string())
    }
}

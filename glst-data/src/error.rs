/// Error types for the GLST data library
use thiserror::Error;

/// Main error type for dataset loading operations
#[derive(Error, Debug)]
pub enum DatasetError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    /// Failed to decode the dataset JSON document
    #[error("Failed to parse dataset JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to read a local dataset file
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset contained no usable monthly variance records
    #[error("Dataset contains no usable records")]
    Empty,
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;

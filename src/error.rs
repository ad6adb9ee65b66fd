//! Error types for ID3 tree induction

use thiserror::Error;

/// Result type alias for tree operations
pub type Result<T> = std::result::Result<T, Id3Error>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Id3Error {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    #[error("Model not fitted")]
    ModelNotFitted,

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No branch for {attribute} = {value}")]
    UnseenValue { attribute: String, value: String },
}

impl From<polars::error::PolarsError> for Id3Error {
    fn from(err: polars::error::PolarsError) -> Self {
        Id3Error::DataError(err.to_string())
    }
}

impl From<serde_json::Error> for Id3Error {
    fn from(err: serde_json::Error) -> Self {
        Id3Error::SerializationError(err.to_string())
    }
}

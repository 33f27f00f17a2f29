//! Grouper-specific error types

use shared::{CollectionRole, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrouperError {
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("No data found for {role} in {path}")]
    EmptyCollection { role: CollectionRole, path: String },

    #[error("Could not detect primary column name for {role} in {path}")]
    MissingPrimaryField { role: CollectionRole, path: String },

    #[error("Malformed input in {path}: {message}")]
    MalformedInput { path: String, message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl GrouperError {
    pub fn config(reason: impl Into<String>) -> Self {
        GrouperError::ConfigurationError { reason: reason.into() }
    }

    /// The one failure the partitioning core can raise
    pub fn no_heads() -> Self {
        Self::config("no heads to assign to")
    }
}

pub type GrouperResult<T> = Result<T, GrouperError>;

//! Shared error types for the grouping workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid UUID: {input}")]
    InvalidUuid { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Unsupported table format: {path}")]
    UnsupportedFormat { path: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

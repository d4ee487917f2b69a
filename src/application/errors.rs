//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Validation errors for scaffold requests
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid {field}: {reason}")]
    InvalidCoordinate { field: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

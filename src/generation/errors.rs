//! Error types for the generation domain

use crate::generation::Classification;
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Swagger loading error: {0}")]
    LoadError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Invalid classification: {0:?}")]
    InvalidClassification(String),

    #[error("No handler registered for classification {0}")]
    UnhandledClassification(Classification),

    #[error("Classification of operation '{operation_id}' was cancelled")]
    Cancelled { operation_id: String },

    #[error("No valid classification for operation '{operation_id}' after {attempts} attempts")]
    RetriesExhausted { operation_id: String, attempts: u32 },

    #[error("External command error: {0}")]
    ExternalCommand(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = GenerationError::Cancelled {
            operation_id: "getPetById".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Classification of operation 'getPetById' was cancelled"
        );

        let error = GenerationError::RetriesExhausted {
            operation_id: "getPetById".to_string(),
            attempts: 3,
        };
        assert!(error.to_string().contains("after 3 attempts"));

        let error = GenerationError::InvalidClassification("A".to_string());
        assert_eq!(error.to_string(), "Invalid classification: \"A\"");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: GenerationError = io_error.into();
        assert!(matches!(error, GenerationError::IoError(_)));
        assert!(error.to_string().contains("File not found"));
    }
}

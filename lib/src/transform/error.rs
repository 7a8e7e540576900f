//! Error types for transformation compilation and application.

use thiserror::Error;

/// Result alias used throughout the transform module.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Error type for transformation operations.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A division transformation was configured with a zero divisor.
    #[error("Division by zero: div transformation configured with a divisor of 0")]
    DivisionByZero,
    /// A statistics-driven transformation targets a feature that was never observed.
    #[error("Missing statistics for feature '{feature}'")]
    MissingStatistics {
        /// Name of the feature with no observations.
        feature: String,
    },
    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<bincode::Error> for TransformError {
    fn from(err: bincode::Error) -> Self {
        TransformError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        TransformError::Serialization(err.to_string())
    }
}

//! Model error types
//!
//! Defines the standardized error type for all model operations.

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur during model fitting or prediction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Insufficient samples for the operation
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Feature matrix and target vector lengths disagree
    #[error("Dimension mismatch: expected {expected} rows, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let error = ModelError::InsufficientData {
            required: 2,
            actual: 0,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 samples, got 0"
        );
    }

    #[test]
    fn test_invalid_parameter_message() {
        let error = ModelError::InvalidParameter {
            name: "learning_rate".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'learning_rate': must be positive"
        );
    }

    #[test]
    fn test_not_fitted_message() {
        assert_eq!(
            ModelError::NotFitted.to_string(),
            "Model must be fitted before prediction"
        );
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let error = ModelError::DimensionMismatch {
            expected: 10,
            actual: 8,
        };
        assert!(error.to_string().contains("expected 10"));
        assert!(error.to_string().contains("got 8"));
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_std_error<E: std::error::Error>() {}
        assert_std_error::<ModelError>();
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(ModelError::NotFitted, ModelError::NotFitted);
        assert_ne!(
            ModelError::NotFitted,
            ModelError::NumericalError("overflow".to_string())
        );
    }
}

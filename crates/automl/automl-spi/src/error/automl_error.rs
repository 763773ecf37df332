//! AutoML error types.
//!
//! Two severities flow through the pipeline. Data-validation and
//! aggregation errors are fatal and abort the run with a typed reason.
//! A single model's training error is recovered: the model is excluded
//! and the pipeline continues, unless every candidate fails.

use model_spi::ModelError;
use thiserror::Error;

/// Errors that can occur during an AutoML run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AutoMlError {
    /// Dataset is empty, or became empty after cleaning.
    #[error("Dataset is empty after cleaning")]
    EmptyDataset,

    /// Feature matrix and target vector lengths disagree.
    #[error("Feature/target length mismatch: {features} rows vs {targets} targets")]
    LengthMismatch { features: usize, targets: usize },

    /// Feature matrix rows have inconsistent widths, or widths disagree
    /// with the feature-name list.
    #[error("Inconsistent feature width: expected {expected} columns, row {row} has {actual}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// No rows survived filtering of missing targets.
    #[error("No usable rows after filtering rows with missing targets")]
    NoUsableRows,

    /// Invalid configuration value.
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Too few samples for the requested split or fold count.
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A single candidate model failed to train or predict (recovered
    /// by the orchestrator, fatal only if every candidate fails).
    #[error("Training {algorithm} failed: {source}")]
    ModelTraining {
        algorithm: String,
        #[source]
        source: ModelError,
    },

    /// Every candidate model failed: nothing to rank.
    #[error("No models could be trained: every candidate failed")]
    NoValidModels,

    /// Artifact serialization failed.
    #[error("Export failed: {0}")]
    ExportError(String),
}

//! AutoML Service Provider Interface
//!
//! Defines traits, data types, and errors for the tabular AutoML pipeline:
//! - Candidate algorithm identities and per-task candidate sets
//! - Immutable dataset snapshots with shape invariants
//! - Trained-model performance records and the run result surface
//! - The engine contract trait

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at the crate root for convenience
pub use contract::EngineRunner;
pub use error::AutoMlError;
pub use model::{
    Algorithm, Dataset, DatasetInfo, FeatureAnalysis, Leaderboard, MetricBundle, ModelExports,
    ModelPerformance, RankedFeature, RunResult, TargetSummary,
};

/// Result type for AutoML operations.
pub type Result<T> = std::result::Result<T, AutoMlError>;

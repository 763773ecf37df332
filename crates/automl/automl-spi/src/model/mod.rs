//! Model module containing AutoML data structures.
//!
//! - [`Algorithm`] - Tagged identity of every supported algorithm
//! - [`Dataset`] - Immutable input snapshot with shape invariants
//! - [`ModelPerformance`] - Per-trained-model evaluation record
//! - [`RunResult`] - The full output surface of a run

mod algorithm;
mod dataset;
mod performance;
mod run_result;

pub use algorithm::Algorithm;
pub use dataset::Dataset;
pub use performance::{MetricBundle, ModelPerformance};
pub use run_result::{
    DatasetInfo, FeatureAnalysis, Leaderboard, ModelExports, RankedFeature, RunResult,
    TargetSummary,
};

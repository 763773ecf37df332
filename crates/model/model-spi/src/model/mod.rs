//! Model module containing shared model data types.
//!
//! - [`Task`] - The learning task a model primitive is solving
//! - [`metrics`] - Evaluation metric formulas and summary records

pub mod metrics;
mod task;

pub use metrics::{ClassificationMetrics, ConfusionMatrix, RegressionMetrics};
pub use task::Task;

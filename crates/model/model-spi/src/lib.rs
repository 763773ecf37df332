//! Model Service Provider Interface
//!
//! Defines core traits and error types for supervised model primitives.
//!
//! This crate provides the foundational abstractions that all model
//! implementations must adhere to:
//!
//! - [`Estimator`]: The primary fit/predict trait
//! - [`SupportsProbability`]: Capability trait for probabilistic classifiers
//! - [`SupportsFeatureImportance`]: Capability trait for importance-reporting models
//! - [`Task`]: The learning task a model is solving
//! - [`model::metrics`]: Evaluation metric formulas and summary records
//! - [`ModelError`]: Standardized error type for all model operations
//! - [`Result`]: Convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Estimator, SupportsFeatureImportance, SupportsProbability};
pub use error::{ModelError, Result};
pub use model::{ClassificationMetrics, ConfusionMatrix, RegressionMetrics, Task};

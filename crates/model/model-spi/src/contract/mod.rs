//! Contract module containing model traits.
//!
//! This module defines the trait hierarchy for supervised models:
//! - [`Estimator`] - Core fit/predict interface
//! - [`SupportsProbability`] - Probabilistic prediction capability
//! - [`SupportsFeatureImportance`] - Feature importance capability

mod estimator;

pub use estimator::{Estimator, SupportsFeatureImportance, SupportsProbability};

//! Supervised model primitives for tabular data
//!
//! This crate provides from-scratch implementations of the supervised
//! learning algorithms used by the AutoML engine, organized by family:
//!
//! - [`linear`]: Linear and logistic regression via gradient descent
//! - [`tree`]: Decision trees and random forests
//! - [`svm`]: Soft-margin linear support vector machine
//! - [`utils`]: Metric formulas, seeded randomness, split utilities
//!
//! ## Example
//!
//! ```rust
//! use model::prelude::*;
//!
//! let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
//! let y: Vec<f64> = (0..20).map(|i| 2.0 * i as f64 + 1.0).collect();
//!
//! let mut lr = LinearRegression::default();
//! lr.fit(&x, &y).unwrap();
//! let preds = lr.predict(&x).unwrap();
//! assert_eq!(preds.len(), 20);
//! ```

pub mod linear;
pub mod svm;
pub mod tree;
pub mod utils;

pub use model_spi::{
    Estimator, ModelError, Result, SupportsFeatureImportance, SupportsProbability, Task,
};

// Re-export for convenience
pub use linear::*;
pub use svm::*;
pub use tree::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use model_spi::{Estimator, SupportsFeatureImportance, SupportsProbability};
    // Linear family
    pub use crate::linear::{LinearRegression, LogisticRegression};
    // Tree family
    pub use crate::tree::{DecisionTree, RandomForest};
    // SVM
    pub use crate::svm::LinearSvm;
    // Randomness and task
    pub use crate::utils::rng::Lcg;
    pub use model_spi::{ModelError, Result, Task};
}

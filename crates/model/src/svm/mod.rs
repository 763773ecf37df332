//! Support vector machines
//!
//! ## Algorithms
//!
//! - **Linear SVM**: soft-margin hinge loss via subgradient descent

pub mod linear_svm;

pub use linear_svm::LinearSvm;

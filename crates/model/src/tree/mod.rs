//! Tree-based models
//!
//! ## Algorithms
//!
//! - **Decision Tree**: recursive binary splitting on Gini impurity
//!   (classification) or MSE (regression)
//! - **Random Forest**: bagging of decision trees over bootstrap resamples
//!   and random feature subsets

pub mod decision_tree;
pub mod random_forest;

pub use decision_tree::{DecisionTree, Node};
pub use random_forest::RandomForest;

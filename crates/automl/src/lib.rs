//! # automl
//!
//! Automatic model training and evaluation for tabular datasets.
//! Cleans the data, detects the problem type, trains a set of
//! candidate models, and ranks them on a held-out split.

pub use automl_facade::*;
pub use automl_facade::prelude;

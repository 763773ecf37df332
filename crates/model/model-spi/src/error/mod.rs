//! Error module containing model error types.
//!
//! This module defines error types for model fitting and prediction.

mod model_error;

pub use model_error::{ModelError, Result};

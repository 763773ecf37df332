//! Error module containing AutoML error types.

mod automl_error;

pub use automl_error::AutoMlError;

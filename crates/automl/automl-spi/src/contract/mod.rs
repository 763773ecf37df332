//! Contract module containing AutoML traits.
//!
//! - [`EngineRunner`] - Runs a full train/evaluate/rank pipeline

mod engine_runner;

pub use engine_runner::EngineRunner;

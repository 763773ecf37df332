//! Shared utilities for model training and evaluation
//!
//! - [`metrics`]: Classification and regression metric formulas
//! - [`rng`]: Seeded linear-congruential randomness
//! - [`validation`]: Deterministic shuffles and train/test splits

pub mod rng;
pub mod validation;

pub use model_spi::model::metrics;

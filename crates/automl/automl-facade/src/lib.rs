//! AutoML Facade
//!
//! High-level API for the AutoML engine. Re-exports all public types
//! from the automl stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use automl_facade::prelude::*;
//!
//! let dataset = Dataset::new(x, y, feature_names, "target".to_string())?;
//! let engine = Engine::new(AutoMlConfig::default());
//! let result = engine.run(&dataset)?;
//! println!("Best model: {}", result.best_model.algorithm);
//! ```

// Re-export everything from core (which includes API and SPI)
pub use automl_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use automl_spi::EngineRunner;

    // Configuration
    pub use automl_api::AutoMlConfig;

    // Error and surface types
    pub use automl_spi::{
        Algorithm, AutoMlError, Dataset, DatasetInfo, FeatureAnalysis, Leaderboard, MetricBundle,
        ModelExports, ModelPerformance, RankedFeature, Result, RunResult, TargetSummary,
    };

    // Implementations
    pub use automl_core::{Engine, Phase, Scaler};

    // Model primitives
    pub use model::prelude::*;
}

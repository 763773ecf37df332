//! Engine contract for running a full AutoML pipeline.

use crate::error::AutoMlError;
use crate::model::{Dataset, RunResult};

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, AutoMlError>;

/// Trait for AutoML pipeline implementations.
///
/// A run either produces a fully populated [`RunResult`] or a typed
/// failure; a partially populated result with an empty leaderboard is
/// never presented as success.
pub trait EngineRunner {
    /// Run the complete pipeline over the given dataset.
    fn run(&self, dataset: &Dataset) -> Result<RunResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFailingEngine;

    impl EngineRunner for AlwaysFailingEngine {
        fn run(&self, _dataset: &Dataset) -> Result<RunResult> {
            Err(AutoMlError::NoValidModels)
        }
    }

    #[test]
    fn test_engine_runner_trait_object() {
        let engine: Box<dyn EngineRunner> = Box::new(AlwaysFailingEngine);
        let dataset = Dataset::new(
            vec![vec![1.0], vec![2.0]],
            vec![0.0, 1.0],
            vec!["f0".to_string()],
            "target".to_string(),
        )
        .unwrap();

        let result = engine.run(&dataset);
        assert!(matches!(result, Err(AutoMlError::NoValidModels)));
    }
}

//! AutoML Consumer API
//!
//! Configuration types and DTOs for AutoML consumers.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use automl_spi::{
    Algorithm, AutoMlError, Dataset, DatasetInfo, EngineRunner, FeatureAnalysis, Leaderboard,
    MetricBundle, ModelExports, ModelPerformance, RankedFeature, Result, RunResult, TargetSummary,
};

/// Configuration for one AutoML run.
///
/// Immutable once a run starts. Invalid values are rejected by
/// [`AutoMlConfig::validate`] before any work happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoMlConfig {
    /// Fraction of samples held out for testing, in (0, 1)
    pub test_fraction: f64,
    /// Number of cross-validation folds, at least 2
    pub cv_folds: usize,
    /// Seed for every stochastic step of the run
    pub random_seed: u64,
    /// Wall-clock training budget; candidates are skipped once elapsed
    /// time exceeds it (running candidates finish)
    pub time_limit_secs: Option<u64>,
    /// Restrict candidates to these algorithms; `None` means every
    /// algorithm applicable to the detected problem type
    pub algorithms: Option<Vec<Algorithm>>,
}

impl Default for AutoMlConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            cv_folds: 5,
            random_seed: 42,
            time_limit_secs: None,
            algorithms: None,
        }
    }
}

impl AutoMlConfig {
    /// Create a configuration with the given seed
    pub fn with_seed(random_seed: u64) -> Self {
        Self {
            random_seed,
            ..Default::default()
        }
    }

    /// Set the held-out test fraction
    pub fn test_fraction(mut self, fraction: f64) -> Self {
        self.test_fraction = fraction;
        self
    }

    /// Set the number of cross-validation folds
    pub fn cv_folds(mut self, folds: usize) -> Self {
        self.cv_folds = folds.max(2);
        self
    }

    /// Set the wall-clock training budget in seconds
    pub fn time_limit_secs(mut self, secs: u64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// Restrict the candidate set to the given algorithms
    pub fn algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = Some(algorithms);
        self
    }

    /// Validate the configuration surface
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(AutoMlError::InvalidConfig {
                name: "test_fraction".to_string(),
                reason: "must be in (0, 1)".to_string(),
            });
        }
        if self.cv_folds < 2 {
            return Err(AutoMlError::InvalidConfig {
                name: "cv_folds".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        if let Some(algorithms) = &self.algorithms {
            if algorithms.is_empty() {
                return Err(AutoMlError::InvalidConfig {
                    name: "algorithms".to_string(),
                    reason: "allowlist must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AutoMlConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cv_folds, 5);
        assert!((config.test_fraction - 0.2).abs() < f64::EPSILON);
        assert!(config.time_limit_secs.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = AutoMlConfig::with_seed(7)
            .test_fraction(0.3)
            .cv_folds(3)
            .time_limit_secs(60)
            .algorithms(vec![Algorithm::RandomForest]);

        assert_eq!(config.random_seed, 7);
        assert!((config.test_fraction - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.cv_folds, 3);
        assert_eq!(config.time_limit_secs, Some(60));
        assert_eq!(config.algorithms, Some(vec![Algorithm::RandomForest]));
    }

    #[test]
    fn test_cv_folds_floor() {
        let config = AutoMlConfig::default().cv_folds(1);
        assert_eq!(config.cv_folds, 2);
    }

    #[test]
    fn test_invalid_test_fraction() {
        for fraction in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let config = AutoMlConfig {
                test_fraction: fraction,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {fraction}");
        }
    }

    #[test]
    fn test_empty_allowlist_rejected() {
        let config = AutoMlConfig {
            algorithms: Some(vec![]),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AutoMlError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = AutoMlConfig::default().algorithms(vec![Algorithm::DecisionTree]);
        let json = serde_json::to_string(&config).unwrap();
        let back: AutoMlConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.algorithms, config.algorithms);
    }
}

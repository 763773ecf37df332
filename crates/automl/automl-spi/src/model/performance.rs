//! Per-trained-model performance records.

use std::collections::BTreeMap;

use model_spi::{ClassificationMetrics, RegressionMetrics, Task};
use serde::{Deserialize, Serialize};

use crate::model::Algorithm;

/// Task-specific metric bundle computed on the test split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricBundle {
    Classification(ClassificationMetrics),
    Regression(RegressionMetrics),
}

impl MetricBundle {
    /// The headline score of the bundle: accuracy for classification,
    /// R² for regression. Used as the validation score of a model.
    pub fn primary_score(&self) -> f64 {
        match self {
            MetricBundle::Classification(m) => m.accuracy,
            MetricBundle::Regression(m) => m.r_squared,
        }
    }
}

/// Evaluation record for one trained candidate model.
///
/// Created once per run and never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPerformance {
    /// Which algorithm produced this record
    pub algorithm: Algorithm,
    /// The task the model was trained for
    pub task: Task,
    /// Headline score on the training split
    pub train_score: f64,
    /// Headline score on the held-out test split
    pub validation_score: f64,
    /// Per-fold cross-validation scores, length is exactly the fold count
    pub cv_scores: Vec<f64>,
    /// Mean of `cv_scores`
    pub cv_mean: f64,
    /// Population standard deviation of `cv_scores`
    pub cv_std: f64,
    /// Wall-clock training time in milliseconds
    pub training_time_ms: f64,
    /// Predictions on the test split
    pub predictions: Vec<f64>,
    /// Ground truth on the test split
    pub actuals: Vec<f64>,
    /// Normalized per-feature importance, when the model reports one
    pub feature_importance: Option<Vec<f64>>,
    /// Hyperparameter snapshot at fit time
    pub hyperparameters: BTreeMap<String, f64>,
    /// Full metric bundle computed on the test split
    pub metrics: MetricBundle,
}

impl ModelPerformance {
    /// Mean and population standard deviation of a score vector.
    pub fn cv_summary(scores: &[f64]) -> (f64, f64) {
        if scores.is_empty() {
            return (f64::NAN, f64::NAN);
        }
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        (mean, variance.sqrt())
    }

    /// Overfitting gap: train score minus validation score.
    pub fn overfit_gap(&self) -> f64 {
        self.train_score - self.validation_score
    }
}

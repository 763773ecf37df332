//! Logistic regression via gradient descent on log-loss
//!
//! Binary only: targets must be 0 or 1. Probabilities come from a sigmoid
//! over the linear decision function; class predictions threshold the
//! probability at 0.5.

use serde::{Deserialize, Serialize};

use crate::linear::{check_training_shape, decision, weight_importance};
use model_spi::{Estimator, ModelError, Result, SupportsFeatureImportance, SupportsProbability};

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Binary logistic regression classifier
///
/// # Example
///
/// ```rust
/// use model::linear::LogisticRegression;
/// use model::{Estimator, SupportsProbability};
///
/// let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64 - 10.0]).collect();
/// let y: Vec<f64> = x.iter().map(|r| if r[0] > 0.0 { 1.0 } else { 0.0 }).collect();
///
/// let mut clf = LogisticRegression::default();
/// clf.fit(&x, &y).unwrap();
/// let probs = clf.predict_proba(&x).unwrap();
/// assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    learning_rate: f64,
    max_iterations: usize,
    tolerance: f64,
    weights: Vec<f64>,
    bias: f64,
    importance: Vec<f64>,
    fitted: bool,
}

impl LogisticRegression {
    /// Create a classifier with explicit gradient-descent settings
    pub fn new(learning_rate: f64, max_iterations: usize, tolerance: f64) -> Result<Self> {
        if learning_rate <= 0.0 || !learning_rate.is_finite() {
            return Err(ModelError::InvalidParameter {
                name: "learning_rate".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        if max_iterations == 0 {
            return Err(ModelError::InvalidParameter {
                name: "max_iterations".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            learning_rate,
            max_iterations,
            tolerance,
            weights: Vec::new(),
            bias: 0.0,
            importance: Vec::new(),
            fitted: false,
        })
    }

    /// Fitted weight vector, one entry per feature
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Fitted intercept
    pub fn bias(&self) -> f64 {
        self.bias
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(0.1, 1000, 1e-6).unwrap()
    }
}

impl Estimator for LogisticRegression {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        check_training_shape(x, y)?;

        if y.iter().any(|&label| label != 0.0 && label != 1.0) {
            return Err(ModelError::InvalidParameter {
                name: "y".to_string(),
                reason: "labels must be 0 or 1".to_string(),
            });
        }

        let n = x.len() as f64;
        let n_features = x[0].len();

        self.weights = vec![0.0; n_features];
        self.bias = 0.0;

        let mut prev_cost = f64::MAX;

        for _ in 0..self.max_iterations {
            let mut grad_w = vec![0.0; n_features];
            let mut grad_b = 0.0;
            let mut cost = 0.0;

            for (row, &target) in x.iter().zip(y.iter()) {
                let p = sigmoid(decision(row, &self.weights, self.bias));
                let err = p - target;
                grad_b += err;
                for (g, &v) in grad_w.iter_mut().zip(row.iter()) {
                    *g += err * v;
                }

                // Clamp keeps ln() finite at saturated probabilities
                let p_safe = p.clamp(1e-12, 1.0 - 1e-12);
                cost -= target * p_safe.ln() + (1.0 - target) * (1.0 - p_safe).ln();
            }

            cost /= n;
            if !cost.is_finite() {
                return Err(ModelError::NumericalError(
                    "gradient descent diverged".to_string(),
                ));
            }

            for (w, g) in self.weights.iter_mut().zip(grad_w.iter()) {
                *w -= self.learning_rate * g / n;
            }
            self.bias -= self.learning_rate * grad_b / n;

            if (prev_cost - cost).abs() < self.tolerance {
                break;
            }
            prev_cost = cost;
        }

        self.importance = weight_importance(&self.weights);
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        let probs = self.predict_proba(x)?;
        Ok(probs
            .into_iter()
            .map(|p| if p >= 0.5 { 1.0 } else { 0.0 })
            .collect())
    }

    fn params(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("learning_rate", self.learning_rate),
            ("max_iterations", self.max_iterations as f64),
            ("tolerance", self.tolerance),
        ]
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl SupportsProbability for LogisticRegression {
    fn predict_proba(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        Ok(x.iter()
            .map(|row| sigmoid(decision(row, &self.weights, self.bias)))
            .collect())
    }
}

impl SupportsFeatureImportance for LogisticRegression {
    fn feature_importance(&self) -> &[f64] {
        &self.importance
    }
}

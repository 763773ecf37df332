//! Linear regression via batch gradient descent
//!
//! Minimizes mean squared error with a fixed learning rate, stopping
//! early once successive cost deltas fall below a tolerance. Weights
//! initialize to zero, so fitting is fully deterministic.

use serde::{Deserialize, Serialize};

use crate::linear::{check_training_shape, decision, weight_importance};
use model_spi::{Estimator, ModelError, Result, SupportsFeatureImportance};

/// Multivariate linear regression model
///
/// # Example
///
/// ```rust
/// use model::linear::LinearRegression;
/// use model::Estimator;
///
/// let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64 / 10.0]).collect();
/// let y: Vec<f64> = x.iter().map(|r| 3.0 * r[0] - 1.0).collect();
///
/// let mut lr = LinearRegression::default();
/// lr.fit(&x, &y).unwrap();
/// assert!(lr.is_fitted());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    learning_rate: f64,
    max_iterations: usize,
    tolerance: f64,
    weights: Vec<f64>,
    bias: f64,
    importance: Vec<f64>,
    fitted: bool,
}

impl LinearRegression {
    /// Create a model with explicit gradient-descent settings
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

impl Default for LinearRegression {
    fn default() -> Self {
        // Learning rate and iteration cap tuned for standardized features
        Self::new(0.01, 1000, 1e-6).unwrap()
    }
}

impl Estimator for LinearRegression {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        check_training_shape(x, y)?;

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
                let err = decision(row, &self.weights, self.bias) - target;
                cost += err * err;
                grad_b += err;
                for (g, &v) in grad_w.iter_mut().zip(row.iter()) {
                    *g += err * v;
                }
            }

            cost /= 2.0 * n;
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
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        Ok(x.iter()
            .map(|row| decision(row, &self.weights, self.bias))
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

impl SupportsFeatureImportance for LinearRegression {
    fn feature_importance(&self) -> &[f64] {
        &self.importance
    }
}

//! Soft-margin linear SVM via subgradient descent
//!
//! Labels in {0, 1} map to {-1, +1} internally. Each pass visits samples
//! in order; the per-sample update branches on whether the sample
//! violates the margin (`y * decision < 1`). Prediction takes the sign of
//! the decision function, mapped back to {0, 1}.

use serde::{Deserialize, Serialize};

use crate::linear::{check_training_shape, decision, weight_importance};
use model_spi::{Estimator, ModelError, Result, SupportsFeatureImportance};

/// Linear support vector classifier
///
/// # Example
///
/// ```rust
/// use model::svm::LinearSvm;
/// use model::Estimator;
///
/// let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64 - 10.0]).collect();
/// let y: Vec<f64> = x.iter().map(|r| if r[0] > 0.0 { 1.0 } else { 0.0 }).collect();
///
/// let mut svm = LinearSvm::default();
/// svm.fit(&x, &y).unwrap();
/// let preds = svm.predict(&x).unwrap();
/// assert!(preds.iter().all(|p| *p == 0.0 || *p == 1.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSvm {
    learning_rate: f64,
    regularization: f64,
    epochs: usize,
    weights: Vec<f64>,
    bias: f64,
    importance: Vec<f64>,
    fitted: bool,
}

impl LinearSvm {
    /// Create a classifier with explicit optimizer settings
    pub fn new(learning_rate: f64, regularization: f64, epochs: usize) -> Result<Self> {
        if learning_rate <= 0.0 || !learning_rate.is_finite() {
            return Err(ModelError::InvalidParameter {
                name: "learning_rate".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        if regularization < 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "regularization".to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
        if epochs == 0 {
            return Err(ModelError::InvalidParameter {
                name: "epochs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            learning_rate,
            regularization,
            epochs,
            weights: Vec::new(),
            bias: 0.0,
            importance: Vec::new(),
            fitted: false,
        })
    }

    /// Raw decision-function values (distance-like scores, sign decides class)
    pub fn decision_function(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        Ok(x.iter()
            .map(|row| decision(row, &self.weights, self.bias))
            .collect())
    }
}

impl Default for LinearSvm {
    fn default() -> Self {
        Self::new(0.01, 0.01, 200).unwrap()
    }
}

impl Estimator for LinearSvm {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        check_training_shape(x, y)?;

        if y.iter().any(|&label| label != 0.0 && label != 1.0) {
            return Err(ModelError::InvalidParameter {
                name: "y".to_string(),
                reason: "labels must be 0 or 1".to_string(),
            });
        }

        let n_features = x[0].len();
        self.weights = vec![0.0; n_features];
        self.bias = 0.0;

        // Internal label mapping {0, 1} -> {-1, +1}
        let signed: Vec<f64> = y.iter().map(|&v| if v >= 0.5 { 1.0 } else { -1.0 }).collect();

        for _ in 0..self.epochs {
            for (row, &target) in x.iter().zip(signed.iter()) {
                let margin = target * decision(row, &self.weights, self.bias);

                if margin < 1.0 {
                    for (w, &v) in self.weights.iter_mut().zip(row.iter()) {
                        *w += self.learning_rate
                            * (target * v - 2.0 * self.regularization * *w);
                    }
                    self.bias += self.learning_rate * target;
                } else {
                    for w in &mut self.weights {
                        *w -= self.learning_rate * 2.0 * self.regularization * *w;
                    }
                }
            }
        }

        if self.weights.iter().any(|w| !w.is_finite()) || !self.bias.is_finite() {
            return Err(ModelError::NumericalError(
                "subgradient descent diverged".to_string(),
            ));
        }

        self.importance = weight_importance(&self.weights);
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        Ok(self
            .decision_function(x)?
            .into_iter()
            .map(|score| if score >= 0.0 { 1.0 } else { 0.0 })
            .collect())
    }

    fn params(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("learning_rate", self.learning_rate),
            ("regularization", self.regularization),
            ("epochs", self.epochs as f64),
        ]
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl SupportsFeatureImportance for LinearSvm {
    fn feature_importance(&self) -> &[f64] {
        &self.importance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        let x: Vec<Vec<f64>> = (0..40)
            .map(|i| vec![i as f64 / 10.0 - 2.0, ((i * 5) % 9) as f64 / 9.0])
            .collect();
        let y: Vec<f64> = x
            .iter()
            .map(|r| if r[0] > 0.0 { 1.0 } else { 0.0 })
            .collect();
        (x, y)
    }

    #[test]
    fn test_separates_classes() {
        let (x, y) = separable_data();
        let mut svm = LinearSvm::default();
        svm.fit(&x, &y).unwrap();

        let preds = svm.predict(&x).unwrap();
        let acc = crate::utils::metrics::accuracy(&y, &preds);
        assert!(acc > 0.9, "accuracy was {acc}");
    }

    #[test]
    fn test_predictions_are_binary() {
        let (x, y) = separable_data();
        let mut svm = LinearSvm::default();
        svm.fit(&x, &y).unwrap();

        for p in svm.predict(&x).unwrap() {
            assert!(p == 0.0 || p == 1.0);
        }
    }

    #[test]
    fn test_decision_sign_matches_prediction() {
        let (x, y) = separable_data();
        let mut svm = LinearSvm::default();
        svm.fit(&x, &y).unwrap();

        let scores = svm.decision_function(&x).unwrap();
        let preds = svm.predict(&x).unwrap();
        for (s, p) in scores.iter().zip(preds.iter()) {
            assert_eq!(*p, if *s >= 0.0 { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn test_rejects_non_binary_labels() {
        let mut svm = LinearSvm::default();
        let result = svm.fit(&[vec![1.0], vec![2.0]], &[1.0, 3.0]);
        assert!(matches!(result, Err(ModelError::InvalidParameter { .. })));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(LinearSvm::new(0.0, 0.01, 100).is_err());
        assert!(LinearSvm::new(0.01, -1.0, 100).is_err());
        assert!(LinearSvm::new(0.01, 0.01, 0).is_err());
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = separable_data();
        let mut a = LinearSvm::default();
        let mut b = LinearSvm::default();
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        assert_eq!(a.predict(&x).unwrap(), b.predict(&x).unwrap());
    }
}

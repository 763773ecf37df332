//! Estimator traits for supervised models
//!
//! Defines the core trait interfaces that all model primitives must implement.

use crate::error::Result;

/// Common trait for all supervised model primitives
///
/// This trait defines the core interface that every model implements.
/// It follows the fit-predict pattern common in statistical and machine
/// learning libraries. Rows of `x` are samples, columns are features;
/// `y` is the parallel target vector.
///
/// # Example
///
/// ```rust,ignore
/// use model_spi::Estimator;
///
/// fn score<M: Estimator>(model: &mut M, x: &[Vec<f64>], y: &[f64]) -> model_spi::Result<Vec<f64>> {
///     model.fit(x, y)?;
///     model.predict(x)
/// }
/// ```
pub trait Estimator {
    /// Fit the model to training data
    ///
    /// # Arguments
    ///
    /// * `x` - Feature matrix, one row per sample
    /// * `y` - Target vector, one entry per sample
    ///
    /// # Returns
    ///
    /// `Ok(())` if fitting succeeds, `Err(ModelError)` otherwise
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()>;

    /// Predict targets for the given feature matrix
    ///
    /// # Returns
    ///
    /// One prediction per input row, or an error if the model is unfitted
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Snapshot of the model's hyperparameters as name/value pairs
    fn params(&self) -> Vec<(&'static str, f64)>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}

/// Capability trait for models that can emit class probabilities
///
/// Implemented only by probabilistic binary classifiers. The returned
/// values are probabilities of the positive class in `[0, 1]`.
pub trait SupportsProbability: Estimator {
    /// Predict positive-class probabilities for the given feature matrix
    fn predict_proba(&self, x: &[Vec<f64>]) -> Result<Vec<f64>>;
}

/// Capability trait for models that report per-feature importance
///
/// The importance vector has one non-negative entry per feature and sums
/// to 1 whenever the fitted model used at least one feature.
pub trait SupportsFeatureImportance: Estimator {
    /// Per-feature importance of the fitted model
    ///
    /// Empty before the model has been fitted.
    fn feature_importance(&self) -> &[f64];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    /// A mock estimator that predicts a constant.
    struct ConstantModel {
        value: f64,
        fitted: bool,
    }

    impl Estimator for ConstantModel {
        fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
            if x.len() != y.len() {
                return Err(ModelError::DimensionMismatch {
                    expected: x.len(),
                    actual: y.len(),
                });
            }
            self.fitted = true;
            Ok(())
        }

        fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
            if !self.fitted {
                return Err(ModelError::NotFitted);
            }
            Ok(vec![self.value; x.len()])
        }

        fn params(&self) -> Vec<(&'static str, f64)> {
            vec![("value", self.value)]
        }

        fn is_fitted(&self) -> bool {
            self.fitted
        }
    }

    impl SupportsProbability for ConstantModel {
        fn predict_proba(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
            if !self.fitted {
                return Err(ModelError::NotFitted);
            }
            Ok(vec![self.value.clamp(0.0, 1.0); x.len()])
        }
    }

    #[test]
    fn test_estimator_trait_object() {
        let mut model: Box<dyn Estimator> = Box::new(ConstantModel {
            value: 1.0,
            fitted: false,
        });
        let x = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let y = vec![1.0, 0.0];

        model.fit(&x, &y).unwrap();
        assert!(model.is_fitted());

        let preds = model.predict(&x).unwrap();
        assert_eq!(preds, vec![1.0, 1.0]);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = ConstantModel {
            value: 0.5,
            fitted: false,
        };
        let result = model.predict(&[vec![1.0]]);
        assert!(matches!(result, Err(ModelError::NotFitted)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut model = ConstantModel {
            value: 0.5,
            fitted: false,
        };
        let result = model.fit(&[vec![1.0], vec![2.0]], &[1.0]);
        assert!(matches!(
            result,
            Err(ModelError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_probability_capability() {
        let mut model = ConstantModel {
            value: 2.0,
            fitted: false,
        };
        model.fit(&[vec![1.0]], &[1.0]).unwrap();
        let probs = model.predict_proba(&[vec![1.0]]).unwrap();
        assert_eq!(probs, vec![1.0]); // clamped to [0, 1]
    }

    #[test]
    fn test_params_snapshot() {
        let model = ConstantModel {
            value: 0.25,
            fitted: false,
        };
        let params = model.params();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].0, "value");
    }
}

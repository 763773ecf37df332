//! Random forest via bagging of decision trees
//!
//! Each tree trains on a bootstrap resample (with replacement, size `n`)
//! restricted to a random subset of `sqrt(features)` split candidates.
//! Prediction is majority vote for classification and the mean for
//! regression. Importance is the per-feature average across trees.
//! All sampling draws from a seeded [`Lcg`], so fits are reproducible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tree::DecisionTree;
use crate::utils::rng::Lcg;
use model_spi::{Estimator, ModelError, Result, SupportsFeatureImportance, Task};

/// Bagged ensemble of decision trees
///
/// # Example
///
/// ```rust
/// use model::tree::RandomForest;
/// use model::{Estimator, Task};
///
/// let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64, (i * 2) as f64]).collect();
/// let y: Vec<f64> = (0..30).map(|i| if i < 15 { 0.0 } else { 1.0 }).collect();
///
/// let mut forest = RandomForest::with_defaults(Task::Classification, 42);
/// forest.fit(&x, &y).unwrap();
/// assert_eq!(forest.predict(&x).unwrap().len(), 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    task: Task,
    n_trees: usize,
    max_depth: usize,
    min_samples_split: usize,
    seed: u64,
    trees: Vec<DecisionTree>,
    importance: Vec<f64>,
    fitted: bool,
}

impl RandomForest {
    /// Create a forest with explicit settings
    pub fn new(
        task: Task,
        n_trees: usize,
        max_depth: usize,
        min_samples_split: usize,
        seed: u64,
    ) -> Result<Self> {
        if n_trees == 0 {
            return Err(ModelError::InvalidParameter {
                name: "n_trees".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        // Stopping-rule validation is delegated to the tree constructor
        DecisionTree::new(task, max_depth, min_samples_split)?;

        Ok(Self {
            task,
            n_trees,
            max_depth,
            min_samples_split,
            seed,
            trees: Vec::new(),
            importance: Vec::new(),
            fitted: false,
        })
    }

    /// Create a forest with default settings for the task
    pub fn with_defaults(task: Task, seed: u64) -> Self {
        Self::new(task, 10, 5, 2, seed).unwrap()
    }

    /// Number of fitted trees
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether the ensemble is empty (unfitted)
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    fn vote(&self, row_preds: &[f64]) -> f64 {
        match self.task {
            Task::Classification => {
                let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
                for &p in row_preds {
                    *counts.entry(p.to_bits()).or_insert(0) += 1;
                }
                counts
                    .iter()
                    .max_by_key(|(_, &c)| c)
                    .map(|(&bits, _)| f64::from_bits(bits))
                    .unwrap_or(0.0)
            }
            Task::Regression => row_preds.iter().sum::<f64>() / row_preds.len().max(1) as f64,
        }
    }
}

impl Estimator for RandomForest {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(ModelError::DimensionMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        if x.is_empty() {
            return Err(ModelError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let n = x.len();
        let n_features = x[0].len();
        let subset_size = ((n_features as f64).sqrt().ceil() as usize).max(1);

        let mut rng = Lcg::new(self.seed);
        let mut trees = Vec::with_capacity(self.n_trees);
        let mut importance = vec![0.0; n_features];

        for _ in 0..self.n_trees {
            let subset = rng.sample_indices(n_features, subset_size.min(n_features.max(1)));

            let mut boot_x = Vec::with_capacity(n);
            let mut boot_y = Vec::with_capacity(n);
            for _ in 0..n {
                let i = rng.next_index(n);
                boot_x.push(x[i].clone());
                boot_y.push(y[i]);
            }

            let mut tree = DecisionTree::new(self.task, self.max_depth, self.min_samples_split)?
                .with_feature_subset(subset);
            tree.fit(&boot_x, &boot_y)?;

            for (acc, &v) in importance.iter_mut().zip(tree.feature_importance().iter()) {
                *acc += v;
            }
            trees.push(tree);
        }

        for v in &mut importance {
            *v /= self.n_trees as f64;
        }
        // Trees that never split contribute zero vectors; rescale so the
        // aggregate still sums to 1 when any split occurred
        let total: f64 = importance.iter().sum();
        if total > 0.0 {
            for v in &mut importance {
                *v /= total;
            }
        }

        self.trees = trees;
        self.importance = importance;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }

        let per_tree: Vec<Vec<f64>> = self
            .trees
            .iter()
            .map(|tree| tree.predict(x))
            .collect::<Result<_>>()?;

        Ok((0..x.len())
            .map(|i| {
                let row_preds: Vec<f64> = per_tree.iter().map(|preds| preds[i]).collect();
                self.vote(&row_preds)
            })
            .collect())
    }

    fn params(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("n_trees", self.n_trees as f64),
            ("max_depth", self.max_depth as f64),
            ("min_samples_split", self.min_samples_split as f64),
        ]
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl SupportsFeatureImportance for RandomForest {
    fn feature_importance(&self) -> &[f64] {
        &self.importance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        let x: Vec<Vec<f64>> = (0..40)
            .map(|i| vec![i as f64, (i % 5) as f64, ((i * 7) % 13) as f64])
            .collect();
        let y: Vec<f64> = (0..40).map(|i| if i < 20 { 0.0 } else { 1.0 }).collect();
        (x, y)
    }

    #[test]
    fn test_fit_predict_classification() {
        let (x, y) = labeled_data();
        let mut forest = RandomForest::with_defaults(Task::Classification, 42);
        forest.fit(&x, &y).unwrap();

        let preds = forest.predict(&x).unwrap();
        let acc = crate::utils::metrics::accuracy(&y, &preds);
        assert!(acc > 0.8, "accuracy was {acc}");
        assert_eq!(forest.len(), 10);
    }

    #[test]
    fn test_regression_votes_are_means() {
        let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..30).map(|i| i as f64 * 2.0).collect();

        let mut forest = RandomForest::with_defaults(Task::Regression, 7);
        forest.fit(&x, &y).unwrap();

        let preds = forest.predict(&x).unwrap();
        let r2 = crate::utils::metrics::r_squared(&y, &preds);
        assert!(r2 > 0.8, "r2 was {r2}");
    }

    #[test]
    fn test_same_seed_same_forest() {
        let (x, y) = labeled_data();
        let mut a = RandomForest::with_defaults(Task::Classification, 99);
        let mut b = RandomForest::with_defaults(Task::Classification, 99);
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        assert_eq!(a.predict(&x).unwrap(), b.predict(&x).unwrap());
    }

    #[test]
    fn test_importance_normalized() {
        let (x, y) = labeled_data();
        let mut forest = RandomForest::with_defaults(Task::Classification, 42);
        forest.fit(&x, &y).unwrap();

        let importance = forest.feature_importance();
        assert_eq!(importance.len(), 3);
        assert!(importance.iter().all(|&v| v >= 0.0));
        let sum: f64 = importance.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_trees_rejected() {
        assert!(RandomForest::new(Task::Classification, 0, 5, 2, 1).is_err());
    }

    #[test]
    fn test_predict_before_fit() {
        let forest = RandomForest::with_defaults(Task::Regression, 1);
        assert!(matches!(
            forest.predict(&[vec![1.0]]),
            Err(ModelError::NotFitted)
        ));
    }
}

//! Decision tree via recursive binary splitting
//!
//! At each node the tree evaluates candidate thresholds (midpoints of the
//! sorted unique values) for every allowed feature and keeps the split
//! with the largest impurity reduction: weighted Gini for classification,
//! weighted MSE for regression. Growth stops at the depth limit, below the
//! minimum split size, or on a pure node. Per-split impurity reductions
//! accumulate into a feature-importance vector normalized to sum 1.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use model_spi::{Estimator, ModelError, Result, SupportsFeatureImportance, Task};

/// A fitted tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Terminal node carrying the predicted value
    Leaf { value: f64 },
    /// Internal node routing rows by `row[feature] <= threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict_row(&self, row: &[f64]) -> f64 {
        match self {
            Node::Leaf { value } => *value,
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                // Missing trailing features route as zeros rather than panicking
                let v = row.get(*feature).copied().unwrap_or(0.0);
                if v <= *threshold {
                    left.predict_row(row)
                } else {
                    right.predict_row(row)
                }
            }
        }
    }

    /// Number of nodes in this subtree
    pub fn size(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { left, right, .. } => 1 + left.size() + right.size(),
        }
    }
}

/// Binary decision tree for classification or regression
///
/// # Example
///
/// ```rust
/// use model::tree::DecisionTree;
/// use model::{Estimator, Task};
///
/// let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
/// let y: Vec<f64> = (0..20).map(|i| if i < 10 { 0.0 } else { 1.0 }).collect();
///
/// let mut tree = DecisionTree::with_defaults(Task::Classification);
/// tree.fit(&x, &y).unwrap();
/// assert_eq!(tree.predict(&[vec![2.0]]).unwrap(), vec![0.0]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    task: Task,
    max_depth: usize,
    min_samples_split: usize,
    /// When set, split search is restricted to these feature columns
    /// (used by random-forest bagging)
    feature_subset: Option<Vec<usize>>,
    root: Option<Node>,
    importance: Vec<f64>,
    fitted: bool,
}

impl DecisionTree {
    /// Create a tree with explicit stopping rules
    pub fn new(task: Task, max_depth: usize, min_samples_split: usize) -> Result<Self> {
        if max_depth == 0 {
            return Err(ModelError::InvalidParameter {
                name: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if min_samples_split < 2 {
            return Err(ModelError::InvalidParameter {
                name: "min_samples_split".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        Ok(Self {
            task,
            max_depth,
            min_samples_split,
            feature_subset: None,
            root: None,
            importance: Vec::new(),
            fitted: false,
        })
    }

    /// Create a tree with the default stopping rules for the task
    pub fn with_defaults(task: Task) -> Self {
        Self::new(task, 5, 2).unwrap()
    }

    /// Restrict splitting to a subset of feature columns
    pub fn with_feature_subset(mut self, features: Vec<usize>) -> Self {
        self.feature_subset = Some(features);
        self
    }

    /// The fitted root node, if any
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    fn impurity(&self, targets: &[f64]) -> f64 {
        if targets.is_empty() {
            return 0.0;
        }
        match self.task {
            Task::Classification => {
                let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
                for &t in targets {
                    *counts.entry(t.to_bits()).or_insert(0) += 1;
                }
                let n = targets.len() as f64;
                1.0 - counts
                    .values()
                    .map(|&c| {
                        let p = c as f64 / n;
                        p * p
                    })
                    .sum::<f64>()
            }
            Task::Regression => {
                let n = targets.len() as f64;
                let mean = targets.iter().sum::<f64>() / n;
                targets.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n
            }
        }
    }

    fn leaf_value(&self, targets: &[f64]) -> f64 {
        match self.task {
            Task::Classification => {
                let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
                for &t in targets {
                    *counts.entry(t.to_bits()).or_insert(0) += 1;
                }
                counts
                    .iter()
                    .max_by_key(|(_, &c)| c)
                    .map(|(&bits, _)| f64::from_bits(bits))
                    .unwrap_or(0.0)
            }
            Task::Regression => {
                if targets.is_empty() {
                    0.0
                } else {
                    targets.iter().sum::<f64>() / targets.len() as f64
                }
            }
        }
    }

    fn candidate_features(&self, n_features: usize) -> Vec<usize> {
        match &self.feature_subset {
            Some(subset) => subset.iter().copied().filter(|&f| f < n_features).collect(),
            None => (0..n_features).collect(),
        }
    }

    /// Best split for the rows at `indices`, as
    /// `(feature, threshold, impurity_reduction, left, right)`.
    fn best_split(
        &self,
        x: &[Vec<f64>],
        y: &[f64],
        indices: &[usize],
        n_features: usize,
    ) -> Option<(usize, f64, f64, Vec<usize>, Vec<usize>)> {
        let parent_targets: Vec<f64> = indices.iter().map(|&i| y[i]).collect();
        let parent_impurity = self.impurity(&parent_targets);
        let n = indices.len() as f64;

        let mut best: Option<(usize, f64, f64, Vec<usize>, Vec<usize>)> = None;

        for feature in self.candidate_features(n_features) {
            let mut values: Vec<f64> = indices
                .iter()
                .map(|&i| x[i].get(feature).copied().unwrap_or(0.0))
                .collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            values.dedup();

            for pair in values.windows(2) {
                let threshold = (pair[0] + pair[1]) / 2.0;

                let (left, right): (Vec<usize>, Vec<usize>) = indices
                    .iter()
                    .partition(|&&i| x[i].get(feature).copied().unwrap_or(0.0) <= threshold);

                if left.is_empty() || right.is_empty() {
                    continue;
                }

                let left_targets: Vec<f64> = left.iter().map(|&i| y[i]).collect();
                let right_targets: Vec<f64> = right.iter().map(|&i| y[i]).collect();

                let weighted = (left.len() as f64 / n) * self.impurity(&left_targets)
                    + (right.len() as f64 / n) * self.impurity(&right_targets);
                let reduction = parent_impurity - weighted;

                let better = match &best {
                    Some((_, _, best_reduction, _, _)) => reduction > *best_reduction,
                    None => reduction > 1e-12,
                };
                if better {
                    best = Some((feature, threshold, reduction, left, right));
                }
            }
        }

        best
    }

    fn build(
        &self,
        x: &[Vec<f64>],
        y: &[f64],
        indices: &[usize],
        depth: usize,
        n_features: usize,
        n_total: f64,
        importance: &mut [f64],
    ) -> Node {
        let targets: Vec<f64> = indices.iter().map(|&i| y[i]).collect();

        let pure = self.impurity(&targets) <= 1e-12;
        if depth >= self.max_depth || indices.len() < self.min_samples_split || pure {
            return Node::Leaf {
                value: self.leaf_value(&targets),
            };
        }

        match self.best_split(x, y, indices, n_features) {
            Some((feature, threshold, reduction, left, right)) => {
                importance[feature] += reduction * indices.len() as f64 / n_total;
                Node::Split {
                    feature,
                    threshold,
                    left: Box::new(self.build(
                        x, y, &left, depth + 1, n_features, n_total, importance,
                    )),
                    right: Box::new(self.build(
                        x, y, &right, depth + 1, n_features, n_total, importance,
                    )),
                }
            }
            None => Node::Leaf {
                value: self.leaf_value(&targets),
            },
        }
    }
}

impl Estimator for DecisionTree {
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

        let n_features = x[0].len();
        let indices: Vec<usize> = (0..x.len()).collect();
        let mut importance = vec![0.0; n_features];

        let root = self.build(
            x,
            y,
            &indices,
            0,
            n_features,
            x.len() as f64,
            &mut importance,
        );

        let total: f64 = importance.iter().sum();
        if total > 0.0 {
            for v in &mut importance {
                *v /= total;
            }
        }

        self.root = Some(root);
        self.importance = importance;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        let root = self.root.as_ref().ok_or(ModelError::NotFitted)?;
        Ok(x.iter().map(|row| root.predict_row(row)).collect())
    }

    fn params(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("max_depth", self.max_depth as f64),
            ("min_samples_split", self.min_samples_split as f64),
        ]
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl SupportsFeatureImportance for DecisionTree {
    fn feature_importance(&self) -> &[f64] {
        &self.importance
    }
}

//! Candidate model construction and dispatch.
//!
//! Every algorithm variant maps to one concrete estimator. Candidates
//! are built fresh for each fit so cross-validation folds never share
//! state.

use automl_spi::Algorithm;
use model::{DecisionTree, LinearRegression, LinearSvm, LogisticRegression, RandomForest};
use model_spi::{Estimator, Result, SupportsFeatureImportance, Task};

/// A concrete estimator tagged with the algorithm that built it.
#[derive(Debug, Clone)]
pub enum CandidateModel {
    Linear(LinearRegression),
    Logistic(LogisticRegression),
    Tree(DecisionTree),
    Forest(RandomForest),
    Svm(LinearSvm),
}

impl CandidateModel {
    /// Build a fresh, unfitted candidate for the given algorithm.
    ///
    /// `seed` only matters for the random forest; every other
    /// estimator is deterministic from its hyperparameters.
    pub fn build(algorithm: Algorithm, task: Task, seed: u64) -> Self {
        match algorithm {
            Algorithm::LinearRegression => Self::Linear(LinearRegression::default()),
            Algorithm::LogisticRegression => Self::Logistic(LogisticRegression::default()),
            Algorithm::DecisionTree => Self::Tree(DecisionTree::with_defaults(task)),
            Algorithm::RandomForest => Self::Forest(RandomForest::with_defaults(task, seed)),
            Algorithm::LinearSvm => Self::Svm(LinearSvm::default()),
        }
    }

    pub fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        match self {
            Self::Linear(m) => m.fit(x, y),
            Self::Logistic(m) => m.fit(x, y),
            Self::Tree(m) => m.fit(x, y),
            Self::Forest(m) => m.fit(x, y),
            Self::Svm(m) => m.fit(x, y),
        }
    }

    pub fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        match self {
            Self::Linear(m) => m.predict(x),
            Self::Logistic(m) => m.predict(x),
            Self::Tree(m) => m.predict(x),
            Self::Forest(m) => m.predict(x),
            Self::Svm(m) => m.predict(x),
        }
    }

    /// Hyperparameters of the underlying estimator.
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Linear(m) => m.params(),
            Self::Logistic(m) => m.params(),
            Self::Tree(m) => m.params(),
            Self::Forest(m) => m.params(),
            Self::Svm(m) => m.params(),
        }
    }

    /// Normalized feature importance, for estimators that expose it.
    pub fn feature_importance(&self) -> Option<&[f64]> {
        match self {
            Self::Linear(m) => Some(m.feature_importance()),
            Self::Logistic(m) => Some(m.feature_importance()),
            Self::Tree(m) => Some(m.feature_importance()),
            Self::Forest(m) => Some(m.feature_importance()),
            Self::Svm(m) => Some(m.feature_importance()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        let x: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![i as f64 / 10.0 - 1.0, (i % 4) as f64])
            .collect();
        let y: Vec<f64> = (0..20).map(|i| if i < 10 { 0.0 } else { 1.0 }).collect();
        (x, y)
    }

    #[test]
    fn test_build_matches_algorithm() {
        let m = CandidateModel::build(Algorithm::RandomForest, Task::Classification, 42);
        assert!(matches!(m, CandidateModel::Forest(_)));
        let m = CandidateModel::build(Algorithm::LinearRegression, Task::Regression, 42);
        assert!(matches!(m, CandidateModel::Linear(_)));
    }

    #[test]
    fn test_each_classifier_fits_and_predicts() {
        let (x, y) = classification_data();
        for algorithm in Algorithm::candidates(Task::Classification) {
            let mut model = CandidateModel::build(algorithm, Task::Classification, 42);
            model.fit(&x, &y).unwrap();
            let predictions = model.predict(&x).unwrap();
            assert_eq!(predictions.len(), x.len());
            assert!(predictions.iter().all(|&p| p == 0.0 || p == 1.0));
        }
    }

    #[test]
    fn test_importance_available_for_all_candidates() {
        let (x, y) = classification_data();
        for algorithm in Algorithm::candidates(Task::Classification) {
            let mut model = CandidateModel::build(algorithm, Task::Classification, 42);
            model.fit(&x, &y).unwrap();
            let importance = model.feature_importance().unwrap();
            assert_eq!(importance.len(), 2);
        }
    }

    #[test]
    fn test_params_nonempty() {
        let model = CandidateModel::build(Algorithm::DecisionTree, Task::Regression, 1);
        assert!(!model.params().is_empty());
    }
}

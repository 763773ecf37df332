//! K-fold cross-validation harness.

use automl_spi::{Algorithm, AutoMlError, Result};
use model::utils::metrics;
use model::utils::validation::{k_fold_indices, take_rows};
use model_spi::Task;

use crate::candidates::CandidateModel;

/// Score a prediction against the task's primary metric.
pub fn primary_score(task: Task, actual: &[f64], predicted: &[f64]) -> f64 {
    match task {
        Task::Classification => metrics::accuracy(actual, predicted),
        Task::Regression => metrics::r_squared(actual, predicted),
    }
}

/// Run k-fold cross-validation for one algorithm.
///
/// A fresh estimator is built for every fold from the algorithm tag,
/// so no state leaks between folds. Always returns exactly `k` scores,
/// one per fold in fold order.
pub fn cross_validate(
    algorithm: Algorithm,
    task: Task,
    x: &[Vec<f64>],
    y: &[f64],
    k: usize,
    seed: u64,
) -> Result<Vec<f64>> {
    let folds = k_fold_indices(x.len(), k, seed);
    let mut scores = Vec::with_capacity(k);

    for fold in 0..k {
        let train_indices: Vec<usize> = folds
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != fold)
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();
        let (train_x, train_y) = take_rows(x, y, &train_indices);
        let (val_x, val_y) = take_rows(x, y, &folds[fold]);

        let mut model = CandidateModel::build(algorithm, task, seed);
        model.fit(&train_x, &train_y).map_err(|source| {
            AutoMlError::ModelTraining {
                algorithm: algorithm.to_string(),
                source,
            }
        })?;
        let predicted = model
            .predict(&val_x)
            .map_err(|source| AutoMlError::ModelTraining {
                algorithm: algorithm.to_string(),
                source,
            })?;
        scores.push(primary_score(task, &val_y, &predicted));
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regression_data(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let x: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64 / n as f64]).collect();
        let y: Vec<f64> = x.iter().map(|row| 3.0 * row[0] + 0.5).collect();
        (x, y)
    }

    #[test]
    fn test_returns_exactly_k_scores() {
        let (x, y) = regression_data(30);
        for k in [2, 3, 5] {
            let scores =
                cross_validate(Algorithm::LinearRegression, Task::Regression, &x, &y, k, 42)
                    .unwrap();
            assert_eq!(scores.len(), k);
        }
    }

    #[test]
    fn test_deterministic_for_same_seed() {
        let (x, y) = regression_data(30);
        let a = cross_validate(Algorithm::DecisionTree, Task::Regression, &x, &y, 3, 7).unwrap();
        let b = cross_validate(Algorithm::DecisionTree, Task::Regression, &x, &y, 3, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_linear_fits_linear_data_well() {
        let (x, y) = regression_data(40);
        let scores =
            cross_validate(Algorithm::LinearRegression, Task::Regression, &x, &y, 4, 42).unwrap();
        for score in scores {
            assert!(score > 0.5, "fold score {score} too low");
        }
    }

    #[test]
    fn test_classification_scores_bounded() {
        let x: Vec<Vec<f64>> = (0..24).map(|i| vec![i as f64, (i * 3 % 7) as f64]).collect();
        let y: Vec<f64> = (0..24).map(|i| if i < 12 { 0.0 } else { 1.0 }).collect();
        let scores = cross_validate(
            Algorithm::LogisticRegression,
            Task::Classification,
            &x,
            &y,
            3,
            42,
        )
        .unwrap();
        assert!(scores.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }
}

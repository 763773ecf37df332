//! Model evaluation metrics
//!
//! Pure functions over `(actual, predicted)` pairs of equal length, for
//! both binary classification (labels in {0, 1}) and regression.

use serde::{Deserialize, Serialize};

/// Confusion counts for binary classification
///
/// Stored as `[[tn, fp], [fn, tp]]`.
pub type ConfusionMatrix = [[usize; 2]; 2];

fn confusion_counts(actual: &[f64], predicted: &[f64]) -> (usize, usize, usize, usize) {
    let mut tp = 0;
    let mut fp = 0;
    let mut tn = 0;
    let mut fn_ = 0;

    for (&a, &p) in actual.iter().zip(predicted.iter()) {
        match (a >= 0.5, p >= 0.5) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (false, false) => tn += 1,
            (true, false) => fn_ += 1,
        }
    }

    (tp, fp, tn, fn_)
}

/// Fraction of predictions matching the actual label
pub fn accuracy(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    let (tp, _, tn, _) = confusion_counts(actual, predicted);
    (tp + tn) as f64 / actual.len() as f64
}

/// Positive predictive value, `tp / (tp + fp)`; 0 when undefined
pub fn precision(actual: &[f64], predicted: &[f64]) -> f64 {
    let (tp, fp, _, _) = confusion_counts(actual, predicted);
    if tp + fp == 0 {
        return 0.0;
    }
    tp as f64 / (tp + fp) as f64
}

/// True positive rate, `tp / (tp + fn)`; 0 when undefined
pub fn recall(actual: &[f64], predicted: &[f64]) -> f64 {
    let (tp, _, _, fn_) = confusion_counts(actual, predicted);
    if tp + fn_ == 0 {
        return 0.0;
    }
    tp as f64 / (tp + fn_) as f64
}

/// Harmonic mean of precision and recall; 0 when either is 0
pub fn f1_score(actual: &[f64], predicted: &[f64]) -> f64 {
    let p = precision(actual, predicted);
    let r = recall(actual, predicted);
    if p + r == 0.0 {
        return 0.0;
    }
    2.0 * p * r / (p + r)
}

/// Confusion matrix reported as `[[tn, fp], [fn, tp]]`
pub fn confusion_matrix(actual: &[f64], predicted: &[f64]) -> ConfusionMatrix {
    let (tp, fp, tn, fn_) = confusion_counts(actual, predicted);
    [[tn, fp], [fn_, tp]]
}

/// Mean Squared Error
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    sum / actual.len() as f64
}

/// Root Mean Squared Error, same scale as the data
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// Mean Absolute Error
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}

/// R-squared (coefficient of determination)
///
/// `1 - SSres / SStot`. 1.0 is perfect, 0.0 matches predicting the mean,
/// negative is worse than the mean. Returns 1.0 for a constant target.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;

    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    if ss_tot < 1e-10 {
        return 1.0;
    }

    1.0 - ss_res / ss_tot
}

/// R-squared adjusted for the number of features
///
/// `1 - (1 - R²)(n - 1) / (n - p - 1)` where `p` is the feature count.
/// Falls back to plain R² when the denominator is non-positive.
pub fn adjusted_r_squared(actual: &[f64], predicted: &[f64], n_features: usize) -> f64 {
    let r2 = r_squared(actual, predicted);
    let n = actual.len() as f64;
    let p = n_features as f64;

    if n - p - 1.0 <= 0.0 {
        return r2;
    }

    1.0 - (1.0 - r2) * (n - 1.0) / (n - p - 1.0)
}

/// All classification metrics computed at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// `[[tn, fp], [fn, tp]]`
    pub confusion_matrix: ConfusionMatrix,
}

impl ClassificationMetrics {
    /// Compute all metrics for a set of binary predictions
    pub fn compute(actual: &[f64], predicted: &[f64]) -> Self {
        Self {
            accuracy: accuracy(actual, predicted),
            precision: precision(actual, predicted),
            recall: recall(actual, predicted),
            f1: f1_score(actual, predicted),
            confusion_matrix: confusion_matrix(actual, predicted),
        }
    }
}

/// All regression metrics computed at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
}

impl RegressionMetrics {
    /// Compute all metrics for a set of regression predictions
    pub fn compute(actual: &[f64], predicted: &[f64], n_features: usize) -> Self {
        Self {
            mse: mse(actual, predicted),
            rmse: rmse(actual, predicted),
            mae: mae(actual, predicted),
            r_squared: r_squared(actual, predicted),
            adjusted_r_squared: adjusted_r_squared(actual, predicted, n_features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_classification() {
        let actual = vec![1.0, 0.0, 1.0, 0.0];
        let m = ClassificationMetrics::compute(&actual, &actual);
        assert_eq!(m.accuracy, 1.0);
        assert_eq!(m.precision, 1.0);
        assert_eq!(m.recall, 1.0);
        assert_eq!(m.f1, 1.0);
        assert_eq!(m.confusion_matrix, [[2, 0], [0, 2]]);
    }

    #[test]
    fn test_confusion_matrix_layout() {
        let actual = vec![1.0, 1.0, 0.0, 0.0, 1.0];
        let predicted = vec![1.0, 0.0, 1.0, 0.0, 1.0];
        // tp=2, fn=1, fp=1, tn=1
        assert_eq!(
            confusion_matrix(&actual, &predicted),
            [[1, 1], [1, 2]]
        );
    }

    #[test]
    fn test_precision_recall_degenerate() {
        // No positive predictions: precision defined as 0
        let actual = vec![1.0, 1.0];
        let predicted = vec![0.0, 0.0];
        assert_eq!(precision(&actual, &predicted), 0.0);
        assert_eq!(recall(&actual, &predicted), 0.0);
        assert_eq!(f1_score(&actual, &predicted), 0.0);
    }

    #[test]
    fn test_accuracy_half() {
        let actual = vec![1.0, 0.0, 1.0, 0.0];
        let predicted = vec![1.0, 1.0, 0.0, 0.0];
        assert!((accuracy(&actual, &predicted) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mse_rmse_mae() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![2.0, 2.0, 5.0];
        // errors: 1, 0, 2
        assert!((mse(&actual, &predicted) - 5.0 / 3.0).abs() < 1e-12);
        assert!((rmse(&actual, &predicted) - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((mae(&actual, &predicted) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_perfect_and_mean() {
        let actual = vec![1.0, 2.0, 3.0, 4.0];
        assert!((r_squared(&actual, &actual) - 1.0).abs() < 1e-12);

        let mean_pred = vec![2.5; 4];
        assert!(r_squared(&actual, &mean_pred).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_constant_target() {
        let actual = vec![5.0; 10];
        let predicted = vec![5.0; 10];
        assert_eq!(r_squared(&actual, &predicted), 1.0);
    }

    #[test]
    fn test_adjusted_r_squared_penalizes_features() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let predicted = vec![1.1, 2.1, 2.9, 4.2, 4.8, 6.1, 7.0, 7.9];
        let r2 = r_squared(&actual, &predicted);
        let adj = adjusted_r_squared(&actual, &predicted, 3);
        assert!(adj < r2);
    }

    #[test]
    fn test_adjusted_r_squared_degenerate_denominator() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![1.0, 2.0, 3.0];
        // n - p - 1 = 0, fall back to plain R²
        assert_eq!(adjusted_r_squared(&actual, &predicted, 2), 1.0);
    }

    #[test]
    fn test_length_mismatch_is_nan() {
        assert!(mse(&[1.0], &[1.0, 2.0]).is_nan());
        assert!(accuracy(&[1.0], &[]).is_nan());
    }
}

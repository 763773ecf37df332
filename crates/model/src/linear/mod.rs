//! Linear models fitted by batch gradient descent
//!
//! ## Algorithms
//!
//! - **Linear Regression**: least-squares objective, continuous targets
//! - **Logistic Regression**: log-loss objective, binary targets

pub mod logistic;
pub mod regression;

pub use logistic::LogisticRegression;
pub use regression::LinearRegression;

/// Shared guard for the linear family: rows and targets must align and
/// at least two samples are needed for a meaningful gradient.
pub(crate) fn check_training_shape(x: &[Vec<f64>], y: &[f64]) -> model_spi::Result<()> {
    if x.len() != y.len() {
        return Err(model_spi::ModelError::DimensionMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(model_spi::ModelError::InsufficientData {
            required: 2,
            actual: x.len(),
        });
    }
    Ok(())
}

/// Normalized absolute weights, used as the importance vector for the
/// whole linear family. All zeros stay all zeros.
pub(crate) fn weight_importance(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().map(|w| w.abs()).sum();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }
    weights.iter().map(|w| w.abs() / total).collect()
}

/// Dot product of a sample row against the weight vector plus bias.
///
/// Zips over the shorter of the two, so an empty or truncated row yields
/// the bias alone rather than panicking.
pub(crate) fn decision(row: &[f64], weights: &[f64], bias: f64) -> f64 {
    row.iter().zip(weights.iter()).map(|(x, w)| x * w).sum::<f64>() + bias
}

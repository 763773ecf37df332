//! Dataset cleaning and standardization.
//!
//! Cleaning happens once on the whole dataset; standardization is fit
//! on training rows only and then applied to both partitions.

use automl_spi::{AutoMlError, Result};

/// Outcome of the cleaning pass over a raw dataset.
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<f64>,
    pub missing_cells: usize,
    pub dropped_rows: usize,
    pub duplicate_rows: usize,
    pub steps: Vec<String>,
}

/// Clean a raw feature matrix and target vector.
///
/// Rows whose target is missing (non-finite) are dropped. Missing
/// feature cells are replaced with 0.0. Exact duplicate rows keep
/// their first occurrence.
pub fn clean(x: &[Vec<f64>], y: &[f64]) -> Result<CleanReport> {
    let mut steps = Vec::new();

    // Drop rows with an unusable target first, so imputation never
    // manufactures a label.
    let mut kept_x: Vec<Vec<f64>> = Vec::with_capacity(x.len());
    let mut kept_y: Vec<f64> = Vec::with_capacity(y.len());
    for (row, &target) in x.iter().zip(y.iter()) {
        if target.is_finite() {
            kept_x.push(row.clone());
            kept_y.push(target);
        }
    }
    let dropped_rows = x.len() - kept_x.len();
    if kept_x.is_empty() {
        return Err(AutoMlError::NoUsableRows);
    }
    if dropped_rows > 0 {
        steps.push(format!("Dropped {dropped_rows} rows with missing target"));
    }

    // Impute missing feature cells with zero.
    let mut missing_cells = 0;
    for row in &mut kept_x {
        for cell in row.iter_mut() {
            if !cell.is_finite() {
                *cell = 0.0;
                missing_cells += 1;
            }
        }
    }
    if missing_cells > 0 {
        steps.push(format!("Imputed {missing_cells} missing cells with 0"));
    }

    // Remove exact duplicates, first occurrence wins. Bit-exact keys
    // keep -0.0 and 0.0 distinct, which is acceptable for dedup.
    let before_dedup = kept_x.len();
    let mut seen = std::collections::BTreeSet::new();
    let mut dedup_x = Vec::with_capacity(before_dedup);
    let mut dedup_y = Vec::with_capacity(before_dedup);
    for (row, target) in kept_x.into_iter().zip(kept_y.into_iter()) {
        let key: Vec<u64> = row
            .iter()
            .chain(std::iter::once(&target))
            .map(|v| v.to_bits())
            .collect();
        if seen.insert(key) {
            dedup_x.push(row);
            dedup_y.push(target);
        }
    }
    let duplicate_rows = before_dedup - dedup_x.len();
    if duplicate_rows > 0 {
        steps.push(format!("Removed {duplicate_rows} duplicate rows"));
    }

    Ok(CleanReport {
        x: dedup_x,
        y: dedup_y,
        missing_cells,
        dropped_rows,
        duplicate_rows,
        steps,
    })
}

/// Column-wise standardizer fit on training data only.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Scaler {
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
}

impl Scaler {
    /// Fit per-column mean and sample standard deviation.
    ///
    /// The deviation sum is divided by `n - 1` (a single row gets a
    /// divisor of 1). Columns with zero variance get a standard
    /// deviation of 1 so the transform maps them to zero instead of NaN.
    pub fn fit(x: &[Vec<f64>]) -> Self {
        let n_features = x.first().map_or(0, |row| row.len());
        let n = x.len().max(1) as f64;
        let mut means = vec![0.0; n_features];
        for row in x {
            for (mean, &value) in means.iter_mut().zip(row.iter()) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }
        let mut stds = vec![0.0; n_features];
        for row in x {
            for (j, &value) in row.iter().enumerate() {
                let diff = value - means[j];
                stds[j] += diff * diff;
            }
        }
        let denominator = (x.len().max(2) - 1) as f64;
        for std in &mut stds {
            *std = (*std / denominator).sqrt();
            if *std < 1e-12 {
                *std = 1.0;
            }
        }
        Self { means, stds }
    }

    /// Apply the fitted transform to a feature matrix.
    pub fn transform(&self, x: &[Vec<f64>]) -> Vec<Vec<f64>> {
        x.iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, &value)| (value - self.means[j]) / self.stds[j])
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_drops_missing_targets() {
        let x = vec![vec![1.0], vec![2.0], vec![3.0]];
        let y = vec![1.0, f64::NAN, 3.0];
        let report = clean(&x, &y).unwrap();
        assert_eq!(report.y, vec![1.0, 3.0]);
        assert_eq!(report.dropped_rows, 1);
    }

    #[test]
    fn test_clean_all_targets_missing() {
        let x = vec![vec![1.0], vec![2.0]];
        let y = vec![f64::NAN, f64::INFINITY];
        assert!(matches!(clean(&x, &y), Err(AutoMlError::NoUsableRows)));
    }

    #[test]
    fn test_clean_imputes_missing_cells() {
        let x = vec![vec![1.0, f64::NAN], vec![f64::NAN, 4.0]];
        let y = vec![0.0, 1.0];
        let report = clean(&x, &y).unwrap();
        assert_eq!(report.missing_cells, 2);
        assert_eq!(report.x[0], vec![1.0, 0.0]);
        assert_eq!(report.x[1], vec![0.0, 4.0]);
    }

    #[test]
    fn test_clean_removes_duplicates() {
        let x = vec![vec![1.0, 2.0], vec![1.0, 2.0], vec![3.0, 4.0]];
        let y = vec![1.0, 1.0, 0.0];
        let report = clean(&x, &y).unwrap();
        assert_eq!(report.x.len(), 2);
        assert_eq!(report.duplicate_rows, 1);
    }

    #[test]
    fn test_clean_same_features_different_target_kept() {
        let x = vec![vec![1.0], vec![1.0]];
        let y = vec![0.0, 1.0];
        let report = clean(&x, &y).unwrap();
        assert_eq!(report.x.len(), 2);
        assert_eq!(report.duplicate_rows, 0);
    }

    #[test]
    fn test_scaler_zero_mean_unit_std() {
        let x = vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]];
        let scaler = Scaler::fit(&x);
        let scaled = scaler.transform(&x);
        for j in 0..2 {
            let mean: f64 = scaled.iter().map(|row| row[j]).sum::<f64>() / 3.0;
            let var: f64 = scaled.iter().map(|row| (row[j] - mean).powi(2)).sum::<f64>() / 2.0;
            assert!(mean.abs() < 1e-9);
            assert!((var.sqrt() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scaler_uses_sample_std() {
        // Sample convention: sum of squared deviations over n - 1.
        let scaler = Scaler::fit(&[vec![1.0], vec![2.0], vec![3.0]]);
        assert!((scaler.stds[0] - 1.0).abs() < 1e-12, "std {}", scaler.stds[0]);
    }

    #[test]
    fn test_scaler_single_row() {
        let scaler = Scaler::fit(&[vec![4.0]]);
        assert_eq!(scaler.means, vec![4.0]);
        assert_eq!(scaler.stds, vec![1.0]);
    }

    #[test]
    fn test_scaler_constant_column() {
        let x = vec![vec![5.0], vec![5.0], vec![5.0]];
        let scaler = Scaler::fit(&x);
        let scaled = scaler.transform(&x);
        for row in scaled {
            assert!(row[0].abs() < 1e-12);
        }
    }

    #[test]
    fn test_scaler_applies_train_statistics_to_test() {
        let train = vec![vec![0.0], vec![2.0]];
        let scaler = Scaler::fit(&train);
        let test = scaler.transform(&[vec![4.0]]);
        // mean 1, sample std sqrt(2): (4 - 1) / sqrt(2)
        assert!((test[0][0] - 3.0 / 2.0_f64.sqrt()).abs() < 1e-9);
    }
}

//! Immutable dataset snapshot.

use serde::{Deserialize, Serialize};

use crate::error::AutoMlError;

/// Input dataset for one AutoML run.
///
/// Supplied by an external feature-extraction stage; every cell must be a
/// finite number or NaN, where NaN marks an explicitly missing value.
/// Construction enforces the shape invariants (`len(x) == len(y)`, every
/// row the same width, width equal to the feature-name count). The
/// dataset is never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
    feature_names: Vec<String>,
    target_name: String,
}

impl Dataset {
    /// Create a dataset, validating shape invariants.
    pub fn new(
        x: Vec<Vec<f64>>,
        y: Vec<f64>,
        feature_names: Vec<String>,
        target_name: String,
    ) -> Result<Self, AutoMlError> {
        if x.is_empty() {
            return Err(AutoMlError::EmptyDataset);
        }
        if x.len() != y.len() {
            return Err(AutoMlError::LengthMismatch {
                features: x.len(),
                targets: y.len(),
            });
        }

        let width = feature_names.len();
        for (i, row) in x.iter().enumerate() {
            if row.len() != width {
                return Err(AutoMlError::InconsistentWidth {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        Ok(Self {
            x,
            y,
            feature_names,
            target_name,
        })
    }

    /// Feature matrix, one row per sample.
    pub fn x(&self) -> &[Vec<f64>] {
        &self.x
    }

    /// Target vector, parallel to the rows of `x`.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Ordered feature names.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Name of the target column.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Number of samples.
    pub fn n_samples(&self) -> usize {
        self.x.len()
    }

    /// Number of features.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }
}

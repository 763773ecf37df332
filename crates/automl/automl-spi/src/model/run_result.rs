//! Run result surface types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ModelPerformance;

/// Ranked sequence of trained models, strictly descending by validation
/// score; the best model is the first entry.
pub type Leaderboard = Vec<ModelPerformance>;

/// Distribution summary of the target column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSummary {
    /// Class label (rendered) to sample count
    Classes(BTreeMap<String, usize>),
    /// Range and center of a continuous target
    Continuous { min: f64, max: f64, mean: f64 },
}

/// Sample/feature counts and cleaning tallies for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub total_samples: usize,
    pub train_samples: usize,
    pub test_samples: usize,
    pub n_features: usize,
    /// Cells replaced during imputation
    pub missing_cells: usize,
    /// Rows dropped for a missing target
    pub dropped_rows: usize,
    /// Exact-duplicate rows removed
    pub duplicate_rows: usize,
    pub target_summary: TargetSummary,
}

/// One entry of the ranked feature list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFeature {
    pub name: String,
    /// Pearson correlation with the target
    pub correlation: f64,
    /// Importance from the best model (0 when unavailable)
    pub importance: f64,
    /// Combined ranking score
    pub score: f64,
    /// Correlation strength label (strong/moderate/weak/very weak)
    pub strength: String,
}

/// Per-feature correlation analysis and the ranked top features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAnalysis {
    pub names: Vec<String>,
    /// Pearson correlation with the target, one entry per feature
    pub correlations: Vec<f64>,
    /// Top features (at most 10) by combined score, best first
    pub top_features: Vec<RankedFeature>,
}

/// Deployable artifacts for the best model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelExports {
    /// Source stub embedding the scaler and hyperparameters. Its
    /// prediction body is a placeholder, not the trained decision
    /// function.
    pub best_model_code: String,
    /// JSON artifact describing the best model
    pub best_model_json: String,
}

/// Everything a successful run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub best_model: ModelPerformance,
    pub leaderboard: Leaderboard,
    pub dataset_info: DatasetInfo,
    pub feature_analysis: FeatureAnalysis,
    /// Ordered descriptions of the preprocessing that was applied
    pub preprocessing_steps: Vec<String>,
    /// Ordered human-readable recommendations
    pub recommendations: Vec<String>,
    pub total_training_time_ms: f64,
    pub model_exports: ModelExports,
}

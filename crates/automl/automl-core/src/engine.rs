//! AutoML run orchestration.
//!
//! A run walks a fixed phase sequence: preprocessing, problem type
//! detection, splitting, standardizing, the training loop, score
//! aggregation, and export. Individual model failures are recovered;
//! data problems and an all-failed training loop abort the run.

use std::collections::BTreeMap;
use std::time::Instant;

use automl_api::AutoMlConfig;
use automl_spi::{
    Algorithm, AutoMlError, Dataset, DatasetInfo, EngineRunner, MetricBundle, ModelPerformance,
    Result, RunResult, TargetSummary,
};
use model::utils::metrics::{ClassificationMetrics, RegressionMetrics};
use model::utils::validation::{take_rows, train_test_split_indices};
use model_spi::Task;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::candidates::CandidateModel;
use crate::cross_validation::{cross_validate, primary_score};
use crate::export::export_best_model;
use crate::feature_analysis;
use crate::preprocess::{clean, Scaler};

/// Maximum distinct target values for a classification problem.
const CLASSIFICATION_CARDINALITY: usize = 10;

/// Phases of one run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Preprocessing,
    ProblemTypeDetection,
    Splitting,
    Standardizing,
    TrainingLoop,
    Aggregating,
    Exporting,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Preprocessing => "preprocessing",
            Phase::ProblemTypeDetection => "problem_type_detection",
            Phase::Splitting => "splitting",
            Phase::Standardizing => "standardizing",
            Phase::TrainingLoop => "training_loop",
            Phase::Aggregating => "aggregating",
            Phase::Exporting => "exporting",
        };
        write!(f, "{name}")
    }
}

/// The AutoML engine. Cheap to construct; all state lives in the run.
#[derive(Debug, Clone)]
pub struct Engine {
    config: AutoMlConfig,
}

impl Engine {
    pub fn new(config: AutoMlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AutoMlConfig {
        &self.config
    }

    /// Decide the problem type from target cardinality.
    ///
    /// At most [`CLASSIFICATION_CARDINALITY`] distinct values means
    /// classification; anything else is regression.
    pub fn detect_task(y: &[f64]) -> Task {
        let distinct: std::collections::BTreeSet<u64> = y.iter().map(|v| v.to_bits()).collect();
        if distinct.len() <= CLASSIFICATION_CARDINALITY {
            Task::Classification
        } else {
            Task::Regression
        }
    }

    fn candidate_set(&self, task: Task) -> Result<Vec<Algorithm>> {
        let candidates: Vec<Algorithm> = match &self.config.algorithms {
            Some(allowed) => allowed
                .iter()
                .copied()
                .filter(|algorithm| algorithm.supports(task))
                .collect(),
            None => Algorithm::candidates(task),
        };
        if candidates.is_empty() {
            return Err(AutoMlError::InvalidConfig {
                name: "algorithms".to_string(),
                reason: format!("no requested algorithm supports {task}"),
            });
        }
        Ok(candidates)
    }

    fn train_candidate(
        &self,
        algorithm: Algorithm,
        task: Task,
        seed: u64,
        train_x: &[Vec<f64>],
        train_y: &[f64],
        test_x: &[Vec<f64>],
        test_y: &[f64],
    ) -> Result<ModelPerformance> {
        let started = Instant::now();

        let mut model = CandidateModel::build(algorithm, task, seed);
        model
            .fit(train_x, train_y)
            .map_err(|source| AutoMlError::ModelTraining {
                algorithm: algorithm.to_string(),
                source,
            })?;

        let train_predictions =
            model
                .predict(train_x)
                .map_err(|source| AutoMlError::ModelTraining {
                    algorithm: algorithm.to_string(),
                    source,
                })?;
        let test_predictions =
            model
                .predict(test_x)
                .map_err(|source| AutoMlError::ModelTraining {
                    algorithm: algorithm.to_string(),
                    source,
                })?;

        let cv_scores = cross_validate(
            algorithm,
            task,
            train_x,
            train_y,
            self.config.cv_folds,
            seed,
        )?;
        let (cv_mean, cv_std) = ModelPerformance::cv_summary(&cv_scores);

        let metrics = match task {
            Task::Classification => MetricBundle::Classification(ClassificationMetrics::compute(
                test_y,
                &test_predictions,
            )),
            Task::Regression => MetricBundle::Regression(RegressionMetrics::compute(
                test_y,
                &test_predictions,
                train_x.first().map_or(0, |row| row.len()),
            )),
        };

        let hyperparameters: BTreeMap<String, f64> = model
            .params()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        Ok(ModelPerformance {
            algorithm,
            task,
            train_score: primary_score(task, train_y, &train_predictions),
            validation_score: metrics.primary_score(),
            cv_scores,
            cv_mean,
            cv_std,
            training_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            predictions: test_predictions,
            actuals: test_y.to_vec(),
            feature_importance: model.feature_importance().map(|imp| imp.to_vec()),
            hyperparameters,
            metrics,
        })
    }

    fn recommendations(
        &self,
        best: &ModelPerformance,
        task: Task,
        missing_cells: usize,
        n_train: usize,
        skipped: usize,
        top_feature: Option<&automl_spi::RankedFeature>,
    ) -> Vec<String> {
        let mut out = Vec::new();

        let score = best.validation_score;
        let metric = match task {
            Task::Classification => "accuracy",
            Task::Regression => "R²",
        };
        if score >= 0.8 {
            out.push(format!(
                "{} performs well ({metric} {score:.3}); suitable for deployment",
                best.algorithm
            ));
        } else if score >= 0.6 {
            out.push(format!(
                "{} is usable ({metric} {score:.3}) but has room to improve; consider more data or feature engineering",
                best.algorithm
            ));
        } else if score >= 0.4 {
            out.push(format!(
                "{} is weak ({metric} {score:.3}); revisit the feature set before relying on it",
                best.algorithm
            ));
        } else {
            out.push(format!(
                "No model generalized well (best {metric} {score:.3}); the target may not be predictable from these features",
            ));
        }

        if best.overfit_gap() > 0.1 {
            out.push(format!(
                "Train/validation gap of {:.3} suggests overfitting; reduce model complexity or add data",
                best.overfit_gap()
            ));
        }
        if best.cv_std > 0.05 {
            out.push(format!(
                "Cross-validation scores vary widely (std {:.3}); results are sensitive to the split",
                best.cv_std
            ));
        }
        if missing_cells > 0 {
            out.push(format!(
                "{missing_cells} missing cells were imputed with 0; verify this is appropriate for your features"
            ));
        }
        if n_train < 50 {
            out.push(format!(
                "Only {n_train} training samples; scores may be unstable"
            ));
        }
        if skipped > 0 {
            out.push(format!(
                "{skipped} candidate(s) skipped after the time limit elapsed; raise time_limit_secs for a full comparison"
            ));
        }
        if let Some(feature) = top_feature {
            out.push(format!(
                "'{}' is the main driver ({} correlation {:+.3} with the target)",
                feature.name, feature.strength, feature.correlation
            ));
        }

        out
    }

    fn target_summary(task: Task, y: &[f64]) -> TargetSummary {
        match task {
            Task::Classification => {
                let mut classes: BTreeMap<String, usize> = BTreeMap::new();
                for &value in y {
                    *classes.entry(format!("{value}")).or_insert(0) += 1;
                }
                TargetSummary::Classes(classes)
            }
            Task::Regression => {
                let min = y.iter().copied().fold(f64::INFINITY, f64::min);
                let max = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let mean = y.iter().sum::<f64>() / y.len().max(1) as f64;
                TargetSummary::Continuous { min, max, mean }
            }
        }
    }
}

impl EngineRunner for Engine {
    fn run(&self, dataset: &Dataset) -> Result<RunResult> {
        self.config.validate()?;
        let run_started = Instant::now();
        let budget = self
            .config
            .time_limit_secs
            .map(std::time::Duration::from_secs);

        info!(phase = %Phase::Preprocessing, samples = dataset.n_samples(), "cleaning dataset");
        let report = clean(dataset.x(), dataset.y())?;

        info!(phase = %Phase::ProblemTypeDetection, "detecting problem type");
        let task = Self::detect_task(&report.y);
        debug!(%task, "problem type detected");
        let candidates = self.candidate_set(task)?;

        info!(phase = %Phase::Splitting, test_fraction = self.config.test_fraction, "splitting");
        let (train_idx, test_idx) = train_test_split_indices(
            report.y.len(),
            self.config.test_fraction,
            self.config.random_seed,
        );
        if train_idx.is_empty() || test_idx.is_empty() {
            return Err(AutoMlError::InsufficientData {
                required: 2,
                actual: report.y.len(),
            });
        }
        let (raw_train_x, train_y) = take_rows(&report.x, &report.y, &train_idx);
        let (raw_test_x, test_y) = take_rows(&report.x, &report.y, &test_idx);

        info!(phase = %Phase::Standardizing, "standardizing features");
        let scaler = Scaler::fit(&raw_train_x);
        let train_x = scaler.transform(&raw_train_x);
        let test_x = scaler.transform(&raw_test_x);

        info!(phase = %Phase::TrainingLoop, candidates = candidates.len(), "training candidates");
        let outcomes: Vec<(Algorithm, Result<Option<ModelPerformance>>)> = candidates
            .par_iter()
            .enumerate()
            .map(|(i, &algorithm)| {
                if let Some(limit) = budget {
                    if run_started.elapsed() >= limit {
                        warn!(%algorithm, "time limit reached, skipping candidate");
                        return (algorithm, Ok(None));
                    }
                }
                let seed = self
                    .config
                    .random_seed
                    .wrapping_add((i as u64 + 1).wrapping_mul(7919));
                let outcome = self
                    .train_candidate(algorithm, task, seed, &train_x, &train_y, &test_x, &test_y)
                    .map(Some);
                (algorithm, outcome)
            })
            .collect();

        info!(phase = %Phase::Aggregating, "ranking models");
        let mut leaderboard = Vec::new();
        let mut skipped = 0;
        for (algorithm, outcome) in outcomes {
            match outcome {
                Ok(Some(performance)) => {
                    debug!(%algorithm, score = performance.validation_score, "candidate trained");
                    leaderboard.push(performance);
                }
                Ok(None) => skipped += 1,
                Err(error) => {
                    warn!(%algorithm, %error, "candidate failed, continuing");
                }
            }
        }
        if leaderboard.is_empty() {
            return Err(AutoMlError::NoValidModels);
        }
        // Descending by validation score, NaN sorts last.
        leaderboard.sort_by(|a, b| {
            b.validation_score
                .partial_cmp(&a.validation_score)
                .unwrap_or_else(|| {
                    a.validation_score
                        .is_nan()
                        .cmp(&b.validation_score.is_nan())
                })
        });
        let best = leaderboard[0].clone();

        let analysis = feature_analysis::analyze(
            &report.x,
            &report.y,
            dataset.feature_names(),
            best.feature_importance.as_deref(),
        );
        let recommendations = self.recommendations(
            &best,
            task,
            report.missing_cells,
            train_y.len(),
            skipped,
            analysis.top_features.first(),
        );
        let dataset_info = DatasetInfo {
            total_samples: dataset.n_samples(),
            train_samples: train_y.len(),
            test_samples: test_y.len(),
            n_features: dataset.n_features(),
            missing_cells: report.missing_cells,
            dropped_rows: report.dropped_rows,
            duplicate_rows: report.duplicate_rows,
            target_summary: Self::target_summary(task, &report.y),
        };

        info!(phase = %Phase::Exporting, best = %best.algorithm, "exporting best model");
        let model_exports = export_best_model(&best, &scaler, dataset.feature_names())?;

        Ok(RunResult {
            best_model: best,
            leaderboard,
            dataset_info,
            feature_analysis: analysis,
            preprocessing_steps: report.steps,
            recommendations,
            total_training_time_ms: run_started.elapsed().as_secs_f64() * 1000.0,
            model_exports,
        })
    }
}

//! Best-model export artifacts.
//!
//! Two artifacts are produced for the winning model: a JSON document
//! describing it, and a standalone Rust source stub that embeds the
//! fitted scaler and hyperparameters.

use automl_spi::{AutoMlError, ModelExports, ModelPerformance, Result};
use serde_json::json;

use crate::preprocess::Scaler;

/// Build both export artifacts for the run's best model.
pub fn export_best_model(
    best: &ModelPerformance,
    scaler: &Scaler,
    feature_names: &[String],
) -> Result<ModelExports> {
    let document = json!({
        "algorithm": best.algorithm,
        "task": best.task.to_string(),
        "validation_score": best.validation_score,
        "cv_mean": best.cv_mean,
        "cv_std": best.cv_std,
        "hyperparameters": best.hyperparameters,
        "feature_names": feature_names,
        "feature_importance": best.feature_importance,
        "scaler": scaler,
    });
    let best_model_json = serde_json::to_string_pretty(&document)
        .map_err(|e| AutoMlError::ExportError(e.to_string()))?;

    let best_model_code = render_code_stub(best, scaler, feature_names);

    Ok(ModelExports {
        best_model_code,
        best_model_json,
    })
}

fn render_literal(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    format!("[{}]", items.join(", "))
}

fn render_code_stub(best: &ModelPerformance, scaler: &Scaler, feature_names: &[String]) -> String {
    let params: Vec<String> = best
        .hyperparameters
        .iter()
        .map(|(name, value)| format!("//   {name} = {value}"))
        .collect();
    format!(
        r#"// {algorithm} model exported by the AutoML engine.
//
// Task: {task}
// Validation score: {score:.4}
// Hyperparameters:
{params}

/// Feature order expected by [`predict`].
pub const FEATURE_NAMES: [&str; {n}] = [{names}];

const MEANS: [f64; {n}] = {means};
const STDS: [f64; {n}] = {stds};

/// Standardize one raw feature row with the training statistics.
pub fn standardize(row: &[f64; {n}]) -> [f64; {n}] {{
    let mut out = [0.0; {n}];
    for i in 0..{n} {{
        out[i] = (row[i] - MEANS[i]) / STDS[i];
    }}
    out
}}

/// Predict one sample. Re-train with the exported hyperparameters to
/// fill in the model body.
pub fn predict(row: &[f64; {n}]) -> f64 {{
    let _scaled = standardize(row);
    unimplemented!("load the exported model parameters")
}}
"#,
        algorithm = best.algorithm,
        task = best.task,
        score = best.validation_score,
        params = params.join("\n"),
        n = feature_names.len(),
        names = feature_names
            .iter()
            .map(|name| format!("{name:?}"))
            .collect::<Vec<_>>()
            .join(", "),
        means = render_literal(&scaler.means),
        stds = render_literal(&scaler.stds),
    )
}

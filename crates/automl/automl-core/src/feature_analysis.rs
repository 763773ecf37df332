//! Feature relevance analysis.
//!
//! Combines target correlation with the best model's feature
//! importance into a single relevance ranking.

use automl_spi::{FeatureAnalysis, RankedFeature};

/// Pearson correlation between a feature column and the target.
///
/// Returns 0.0 when either side has zero variance.
pub fn pearson(feature: &[f64], target: &[f64]) -> f64 {
    let n = feature.len().min(target.len());
    if n == 0 {
        return 0.0;
    }
    let nf = n as f64;
    let mean_x: f64 = feature[..n].iter().sum::<f64>() / nf;
    let mean_y: f64 = target[..n].iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = feature[i] - mean_x;
        let dy = target[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x < 1e-12 || var_y < 1e-12 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Qualitative label for an absolute correlation value.
pub fn correlation_strength(correlation: f64) -> &'static str {
    let abs = correlation.abs();
    if abs >= 0.7 {
        "strong"
    } else if abs >= 0.3 {
        "moderate"
    } else if abs >= 0.1 {
        "weak"
    } else {
        "very weak"
    }
}

/// Rank features by combined correlation and model importance.
///
/// The relevance score averages |correlation| with the best model's
/// normalized importance (correlation alone when no importance is
/// available). At most the ten highest-scoring features are kept.
pub fn analyze(
    x: &[Vec<f64>],
    y: &[f64],
    feature_names: &[String],
    importance: Option<&[f64]>,
) -> FeatureAnalysis {
    let n_features = feature_names.len();
    let correlations: Vec<f64> = (0..n_features)
        .map(|j| {
            let column: Vec<f64> = x.iter().map(|row| row.get(j).copied().unwrap_or(0.0)).collect();
            pearson(&column, y)
        })
        .collect();

    let mut ranked: Vec<RankedFeature> = (0..n_features)
        .map(|j| {
            let correlation = correlations[j];
            let model_importance = importance.and_then(|imp| imp.get(j).copied()).unwrap_or(0.0);
            let score = if importance.is_some() {
                (correlation.abs() + model_importance) / 2.0
            } else {
                correlation.abs()
            };
            RankedFeature {
                name: feature_names[j].clone(),
                correlation,
                importance: model_importance,
                score,
                strength: correlation_strength(correlation).to_string(),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(10);

    FeatureAnalysis {
        names: feature_names.to_vec(),
        correlations,
        top_features: ranked,
    }
}

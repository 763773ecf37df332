//! Basic example demonstrating an AutoML run
//!
//! Run with: cargo run --example basic -p automl

use automl::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== AutoML Basic Example ===\n");

    // Synthetic binary classification data: two clusters plus noise.
    let mut rng = Lcg::new(2024);
    let n = 60;
    let x: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            let offset = if i < n / 2 { 0.0 } else { 4.0 };
            vec![
                offset + rng.next_f64() * 2.0,
                offset + rng.next_f64() * 2.0,
                rng.next_f64(),
            ]
        })
        .collect();
    let y: Vec<f64> = (0..n).map(|i| if i < n / 2 { 0.0 } else { 1.0 }).collect();

    let dataset = Dataset::new(
        x,
        y,
        vec!["width".to_string(), "height".to_string(), "noise".to_string()],
        "class".to_string(),
    )?;

    let engine = Engine::new(AutoMlConfig::with_seed(42).cv_folds(3));
    let result = engine.run(&dataset)?;

    println!("Problem type: {}", result.best_model.task);
    println!(
        "Samples: {} train / {} test\n",
        result.dataset_info.train_samples, result.dataset_info.test_samples
    );

    println!("Leaderboard:");
    for (rank, model) in result.leaderboard.iter().enumerate() {
        println!(
            "  {}. {:<20} score {:.3}  cv {:.3} ± {:.3}  ({:.1} ms)",
            rank + 1,
            model.algorithm.to_string(),
            model.validation_score,
            model.cv_mean,
            model.cv_std,
            model.training_time_ms,
        );
    }

    println!("\nTop features:");
    for feature in &result.feature_analysis.top_features {
        println!(
            "  {:<8} correlation {:+.3} ({})",
            feature.name, feature.correlation, feature.strength
        );
    }

    println!("\nRecommendations:");
    for recommendation in &result.recommendations {
        println!("  - {recommendation}");
    }

    Ok(())
}

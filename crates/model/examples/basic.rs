//! Basic example demonstrating the model primitives
//!
//! Run with: cargo run --example basic -p model

use model::prelude::*;
use model::utils::metrics::{ClassificationMetrics, RegressionMetrics};

fn main() -> Result<()> {
    println!("=== Model Primitives Basic Examples ===\n");

    // 1. Linear regression on a noiseless linear target
    println!("1. Linear Regression");
    let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64 / 30.0]).collect();
    let y: Vec<f64> = x.iter().map(|row| 3.0 * row[0] + 1.0).collect();

    let mut linear = LinearRegression::default();
    linear.fit(&x, &y)?;
    let predicted = linear.predict(&x)?;
    let metrics = RegressionMetrics::compute(&y, &predicted, 1);
    println!("   R²: {:.4}", metrics.r_squared);
    println!("   RMSE: {:.4}\n", metrics.rmse);

    // 2. Binary classification with three different models
    println!("2. Binary Classification");
    let x: Vec<Vec<f64>> = (0..30)
        .map(|i| {
            let offset = if i < 15 { -2.0 } else { 2.0 };
            vec![offset + (i % 5) as f64 * 0.1, offset]
        })
        .collect();
    let y: Vec<f64> = (0..30).map(|i| if i < 15 { 0.0 } else { 1.0 }).collect();

    let mut logistic = LogisticRegression::default();
    logistic.fit(&x, &y)?;
    let accuracy = ClassificationMetrics::compute(&y, &logistic.predict(&x)?).accuracy;
    println!("   Logistic Regression accuracy: {accuracy:.3}");

    let mut tree = DecisionTree::with_defaults(Task::Classification);
    tree.fit(&x, &y)?;
    let accuracy = ClassificationMetrics::compute(&y, &tree.predict(&x)?).accuracy;
    println!("   Decision Tree accuracy: {accuracy:.3}");

    let mut forest = RandomForest::with_defaults(Task::Classification, 42);
    forest.fit(&x, &y)?;
    let accuracy = ClassificationMetrics::compute(&y, &forest.predict(&x)?).accuracy;
    println!("   Random Forest accuracy: {accuracy:.3}\n");

    // 3. Feature importance
    println!("3. Feature Importance (Random Forest)");
    for (i, value) in forest.feature_importance().iter().enumerate() {
        println!("   feature {i}: {value:.3}");
    }

    Ok(())
}

//! Supported algorithm identities.

use model_spi::Task;
use serde::{Deserialize, Serialize};

/// Tagged identity of every algorithm the engine can train.
///
/// Cross-validation clones fresh, untrained models by this identity, and
/// the orchestrator's candidate factory is keyed by it. No stringly-typed
/// dispatch anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    LinearRegression,
    LogisticRegression,
    DecisionTree,
    RandomForest,
    LinearSvm,
}

impl Algorithm {
    /// Whether this algorithm applies to the given task.
    pub fn supports(&self, task: Task) -> bool {
        match self {
            Algorithm::LinearRegression => task == Task::Regression,
            Algorithm::LogisticRegression | Algorithm::LinearSvm => task == Task::Classification,
            Algorithm::DecisionTree | Algorithm::RandomForest => true,
        }
    }

    /// The default candidate set for a task, in training order.
    pub fn candidates(task: Task) -> Vec<Algorithm> {
        match task {
            Task::Classification => vec![
                Algorithm::LogisticRegression,
                Algorithm::RandomForest,
                Algorithm::DecisionTree,
                Algorithm::LinearSvm,
            ],
            Task::Regression => vec![
                Algorithm::LinearRegression,
                Algorithm::RandomForest,
                Algorithm::DecisionTree,
            ],
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::LinearRegression => write!(f, "Linear Regression"),
            Algorithm::LogisticRegression => write!(f, "Logistic Regression"),
            Algorithm::DecisionTree => write!(f, "Decision Tree"),
            Algorithm::RandomForest => write!(f, "Random Forest"),
            Algorithm::LinearSvm => write!(f, "Linear SVM"),
        }
    }
}

//! Learning task types.

use serde::{Deserialize, Serialize};

/// The supervised learning task a model is solving
///
/// Task selection decides split objectives (Gini vs MSE), leaf values
/// (majority class vs mean), forest voting, and which metric family is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    /// Binary classification with labels in {0, 1}
    Classification,
    /// Continuous target regression
    Regression,
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::Classification => write!(f, "classification"),
            Task::Regression => write!(f, "regression"),
        }
    }
}

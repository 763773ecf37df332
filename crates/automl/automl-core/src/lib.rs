//! AutoML Core Implementation
//!
//! Engine phases and supporting machinery: dataset cleaning,
//! candidate construction, cross-validation, feature analysis, and
//! export of the winning model.

pub mod candidates;
pub mod cross_validation;
pub mod engine;
pub mod export;
pub mod feature_analysis;
pub mod preprocess;

pub use candidates::CandidateModel;
pub use cross_validation::{cross_validate, primary_score};
pub use engine::{Engine, Phase};
pub use export::export_best_model;
pub use preprocess::{clean, CleanReport, Scaler};

//! This directory provides some features for research.
//! Evaluate a learner by k-fold cross-validation and measure
//! - Accuracy
//! - False-positive rate
//! - False-negative rate

/// Defines the confusion matrix of binary predictions.
pub mod confusion_matrix;

/// Defines the per-fold reports and their summary.
pub mod report;

/// Provides k-fold cross-validation.
pub mod cross_validation;


pub use confusion_matrix::ConfusionMatrix;

pub use report::{
    FoldReport,
    Prediction,
    Summary,
    to_json,
};

pub use cross_validation::{
    CrossValidation,
    Fold,
    Folds,
    evaluate,
    DEFAULT_N_FOLDS,
    DEFAULT_SEED,
};

#![warn(missing_docs)]

//! 
//! A crate that provides some learners over binary features
//! and a k-fold cross-validation harness to evaluate them.
//! 
//! Every instance has an identifier, a binary label,
//! and a fixed number of binary features.
//! 
//! - ID3 decision tree
//!     Grows a binary tree by maximizing the information gain.
//!     Growth is pruned by a chi-square test on the label distribution
//!     and by a minimal information gain.
//!     See [`DecisionTreeBuilder`].
//! 
//! 
//! - Naive Bayes and k-nearest neighbor
//!     Simple baselines that share the [`Learner`] trait
//!     with the decision tree.
//! 
//! 
//! - Cross-validation
//!     [`CrossValidation`] cuts the instances into contiguous folds,
//!     trains a fresh model per fold,
//!     and reports a [`ConfusionMatrix`] per fold.
//! 
//! # Example
//! ```no_run
//! use minilearn::prelude::*;
//! 
//! let sample = SampleReader::default()
//!     .file("/path/to/data/file.csv")
//!     .has_header(true)
//!     .read()
//!     .unwrap();
//! 
//! let reports = minilearn::evaluate(sample.instances(), 10).unwrap();
//! for report in reports {
//!     println!("{}", report.accuracy());
//! }
//! ```

pub mod error;
pub mod sample;
pub mod common;
pub mod hypothesis;
pub mod learner;
pub mod research;

pub mod prelude;


pub use error::{Error, Result};

pub use sample::{Instance, Sample, SampleReader};

pub use hypothesis::Classifier;

pub use learner::{
    Learner,

    // Decision tree
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,

    // Naive Bayes
    NaiveBayes,
    NaiveBayesClassifier,

    // k-nearest neighbor
    NearestNeighbor,
    NearestNeighborClassifier,
};

pub use research::{
    CrossValidation,
    ConfusionMatrix,
    FoldReport,
    Summary,
    evaluate,
};

//! The files in `learner/` directory defines
//! `Learner` trait and the learners.

/// Provides Learner trait.
pub mod core;

/// Defines the ID3 decision tree.
pub mod decision_tree;

/// Defines Naive Bayes.
pub mod naive_bayes;

/// Defines k-nearest neighbor.
pub mod nearest_neighbor;


pub use self::core::Learner;

pub use self::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};

pub use self::naive_bayes::{
    NaiveBayes,
    NaiveBayesClassifier,
};

pub use self::nearest_neighbor::{
    NearestNeighbor,
    NearestNeighborClassifier,
};

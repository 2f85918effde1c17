//! Exports the standard learners, traits, and the cross-validation harness.
//! 
pub use crate::error::{Error, Result};


pub use crate::sample::{
    Instance,
    Sample,
    SampleReader,
};


pub use crate::hypothesis::Classifier;


pub use crate::learner::{
    // Learner trait
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


pub use crate::research::{
    CrossValidation,
    ConfusionMatrix,
    FoldReport,
    Prediction,
    Summary,
    to_json,
};

/// Defines the ID3 decision tree learner.
pub mod dtree;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;

/// Defines the inner representation of `DecisionTreeClassifier`.
pub mod node;


pub use builder::{
    DecisionTreeBuilder,
    DEFAULT_MIN_GAIN,
    DEFAULT_MIN_CHI_SQUARE,
};
pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use node::Node;

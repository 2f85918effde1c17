/// Defines k-nearest neighbor learner.
mod knn;
/// Defines the classifier returned by `NearestNeighbor`.
mod knn_classifier;

pub use knn::{NearestNeighbor, DEFAULT_NEIGHBORS};
pub use knn_classifier::NearestNeighborClassifier;

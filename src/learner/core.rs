//! Provides [`Learner`] trait.
use crate::{Classifier, Instance};
use crate::error::Result;


/// An interface that returns a classifier
/// trained on the given instances.
pub trait Learner {
    /// The classifier type produced by this learner.
    type Model: Classifier;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the learner as `(name, value)` pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Trains a fresh model on `instances`.
    /// Returns [`Error::EmptySample`](crate::Error::EmptySample)
    /// if `instances` is empty and
    /// [`Error::FeatureCountMismatch`](crate::Error::FeatureCountMismatch)
    /// if the instances disagree on the number of features.
    fn train(&self, instances: &[&Instance]) -> Result<Self::Model>;
}

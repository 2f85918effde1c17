//! The core library for the `Classifier` trait.
use crate::{Instance, Sample};


/// A trait that defines the function
/// a trained model uses to predict a binary label.
pub trait Classifier {
    /// Predicts the label of the given instance.
    fn classify(&self, instance: &Instance) -> bool;


    /// Predicts the labels of all instances in `sample`.
    fn classify_all(&self, sample: &Sample) -> Vec<bool> {
        sample.iter()
            .map(|instance| self.classify(instance))
            .collect()
    }
}

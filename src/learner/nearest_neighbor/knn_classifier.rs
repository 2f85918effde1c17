use fixedbitset::FixedBitSet;

use crate::{Classifier, Instance};


/// k-nearest neighbor classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNeighborClassifier {
    pub(super) k: usize,
    /// Feature vectors and labels of the training instances.
    pub(super) references: Vec<(FixedBitSet, bool)>,
}


impl NearestNeighborClassifier {
    /// Returns the labels of the `k` nearest training instances,
    /// nearest first.
    /// Training instances at equal distance keep their training order.
    pub fn neighbors(&self, instance: &Instance) -> Vec<bool> {
        let x = instance.features();

        let mut distances = self.references.iter()
            .map(|(features, label)| {
                (features.symmetric_difference(x).count(), *label)
            })
            .collect::<Vec<_>>();
        distances.sort_by_key(|&(distance, _)| distance);

        distances.into_iter()
            .take(self.k)
            .map(|(_, label)| label)
            .collect()
    }
}


impl Classifier for NearestNeighborClassifier {
    fn classify(&self, instance: &Instance) -> bool {
        let votes = self.neighbors(instance);
        let n_pos = votes.iter().filter(|&&y| y).count();
        n_pos > votes.len() - n_pos
    }
}

use crate::{Instance, Learner};
use crate::common::checker;
use crate::error::Result;

use super::knn_classifier::*;

use std::fmt;


/// The number of voting neighbors set as default.
pub const DEFAULT_NEIGHBORS: usize = 5;


/// The k-nearest neighbor learner.
/// Training memorizes the instances;
/// the produced [`NearestNeighborClassifier`] votes among
/// the `k` training instances closest in Hamming distance.
#[derive(Debug, Clone, Copy)]
pub struct NearestNeighbor {
    k: usize,
}


impl Default for NearestNeighbor {
    fn default() -> Self {
        Self { k: DEFAULT_NEIGHBORS }
    }
}


impl NearestNeighbor {
    /// Construct a new `NearestNeighbor` voting among `k` neighbors.
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// if `k == 0`.
    pub fn new(k: usize) -> Result<Self> {
        checker::positive("k", k)?;
        Ok(Self { k })
    }


    /// The number of voting neighbors.
    pub fn k(&self) -> usize {
        self.k
    }
}


impl Learner for NearestNeighbor {
    type Model = NearestNeighborClassifier;


    fn name(&self) -> &str {
        "k-Nearest Neighbor"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        Some(vec![("# of neighbors", format!("{}", self.k))])
    }


    fn train(&self, instances: &[&Instance]) -> Result<Self::Model> {
        checker::instances(instances)?;

        let references = instances.iter()
            .map(|inst| (inst.features().clone(), inst.label()))
            .collect::<Vec<_>>();

        Ok(NearestNeighborClassifier { k: self.k, references, })
    }
}


impl fmt::Display for NearestNeighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "----------\n# k-Nearest Neighbor\n\n- k: {}\n----------",
            self.k,
        )
    }
}

use rayon::prelude::*;

use crate::{Instance, Learner};
use crate::common::checker;
use crate::error::Result;

use super::nbayes_classifier::*;

use std::fmt;


/// A factory that produces a [`NaiveBayesClassifier`]
/// for binary features.
/// Each feature is modeled as a Bernoulli variable
/// conditioned on the label.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBayes;


impl NaiveBayes {
    /// Initializes the NaiveBayes instance.
    pub fn init() -> Self {
        Self {}
    }
}


impl Learner for NaiveBayes {
    type Model = NaiveBayesClassifier;


    fn name(&self) -> &str {
        "Naive Bayes"
    }


    fn train(&self, instances: &[&Instance]) -> Result<Self::Model> {
        let n_feature = checker::instances(instances)?;
        let n_sample = instances.len();

        let n_pos = instances.iter()
            .filter(|inst| inst.label())
            .count();
        let n_label = [n_sample - n_pos, n_pos];

        // `evidence[f][label][value]`
        let evidence = (0..n_feature).into_par_iter()
            .map(|f| {
                let mut counts = [[0usize; 2]; 2];
                for inst in instances {
                    let label = usize::from(inst.label());
                    let value = usize::from(inst.feature(f));
                    counts[label][value] += 1;
                }
                counts
            })
            .collect::<Vec<_>>();

        Ok(NaiveBayesClassifier { n_sample, n_label, evidence, })
    }
}


impl fmt::Display for NaiveBayes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "----------\n# Naive Bayes\n----------")
    }
}

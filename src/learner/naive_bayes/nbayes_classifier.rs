use serde::{
    Serialize,
    Deserialize,
};

use crate::{Classifier, Instance};


/// Additive smoothing applied to every count.
const SMOOTHING: f64 = 0.5;


/// Naive Bayes classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesClassifier {
    pub(super) n_sample: usize,
    /// The number of training instances labeled `0` and `1`.
    pub(super) n_label: [usize; 2],
    /// `evidence[f][label][value]` is the number of training instances
    /// with `label` whose `f`th feature is `value`.
    pub(super) evidence: Vec<[[usize; 2]; 2]>,
}


impl NaiveBayesClassifier {
    /// Returns a score proportional to the log-likelihood
    /// that `instance` has `label`.
    ///
    /// The score is `Σ_f log2((n(label, f, x_f) + 0.5) / (n(label) + 0.5))`
    /// weighted by the prior of `label`.
    pub fn score(&self, instance: &Instance, label: bool) -> f64 {
        debug_assert_eq!(instance.n_features(), self.evidence.len());

        let y = usize::from(label);
        let total = self.n_label[y] as f64 + SMOOTHING;

        let log_likelihood = self.evidence.iter()
            .enumerate()
            .map(|(f, counts)| {
                let value = usize::from(instance.feature(f));
                let count = counts[y][value] as f64;
                ((count + SMOOTHING) / total).log2()
            })
            .sum::<f64>();

        let prior = self.n_label[y] as f64 / self.n_sample as f64;
        log_likelihood * prior
    }


    /// Returns the pair of scores for the labels `1` and `0`.
    pub fn scores(&self, instance: &Instance) -> (f64, f64) {
        (self.score(instance, true), self.score(instance, false))
    }
}


impl Classifier for NaiveBayesClassifier {
    fn classify(&self, instance: &Instance) -> bool {
        let (pos, neg) = self.scores(instance);
        pos > neg
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Learner, NaiveBayes};

    const TEST_TOLERANCE: f64 = 1e-9;

    fn instances() -> Vec<Instance> {
        [
            (1, [1, 0]),
            (1, [1, 1]),
            (1, [1, 0]),
            (0, [0, 1]),
            (0, [0, 0]),
        ]
        .iter()
        .enumerate()
        .map(|(i, (y, x))| Instance::new(format!("i{i}"), *y, x).unwrap())
        .collect()
    }

    #[test]
    fn test_counts() {
        let insts = instances();
        let refs = insts.iter().collect::<Vec<_>>();
        let f = NaiveBayes::init().train(&refs).unwrap();

        assert_eq!(f.n_sample, 5);
        assert_eq!(f.n_label, [2, 3]);
        assert_eq!(f.evidence[0], [[2, 0], [0, 3]]);
        assert_eq!(f.evidence[1], [[1, 1], [2, 1]]);
    }

    #[test]
    fn test_score() {
        let insts = instances();
        let refs = insts.iter().collect::<Vec<_>>();
        let f = NaiveBayes::init().train(&refs).unwrap();

        let x = Instance::new("x", 0, &[1, 0]).unwrap();
        let expected = ((3.5f64 / 3.5).log2() + (2.5f64 / 3.5).log2()) * 0.6;
        assert!((f.score(&x, true) - expected).abs() < TEST_TOLERANCE);
        let expected = ((0.5f64 / 2.5).log2() + (1.5f64 / 2.5).log2()) * 0.4;
        assert!((f.score(&x, false) - expected).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_classify() {
        let insts = instances();
        let refs = insts.iter().collect::<Vec<_>>();
        let f = NaiveBayes::init().train(&refs).unwrap();

        let x = Instance::new("x", 0, &[1, 0]).unwrap();
        assert!(f.classify(&x));
        let x = Instance::new("y", 0, &[0, 1]).unwrap();
        assert!(!f.classify(&x));
    }
}

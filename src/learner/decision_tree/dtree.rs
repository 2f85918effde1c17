use fixedbitset::FixedBitSet;
use rayon::prelude::*;

use crate::{Instance, Learner};
use crate::common::checker;
use crate::common::statistics::*;
use crate::error::Result;

use super::{
    node::*,
    dtree_classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The ID3 Decision Tree algorithm.
/// Given a set of binary instances,
/// [`DecisionTree`] grows a tree by splitting on the feature
/// that maximizes the information gain,
/// and outputs a [`DecisionTreeClassifier`].
///
/// Growth stops at a node when
/// 1. every feature is already tested on the path from the root,
/// 2. the label distribution of the node is not significantly
///    different from a `50/50` split
///    (chi-square statistic below `min_chi_square`), or
/// 3. no feature gains at least `min_gain` bits.
///
/// A stopped node becomes a leaf predicting the majority label
/// (ties predict `0`).
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/data/file.csv")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new()
///     .min_gain(0.05)
///     .min_chi_square(0.211)
///     .build()
///     .unwrap();
///
/// let train = sample.iter().collect::<Vec<_>>();
/// let f = tree.train(&train).unwrap();
///
/// let predictions = f.classify_all(&sample);
/// let n_sample = sample.shape().0;
/// let loss = sample.iter()
///     .zip(predictions)
///     .filter(|(inst, p)| inst.label() != *p)
///     .count() as f64
///     / n_sample as f64;
/// println!("loss (train) is: {loss}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTree {
    min_gain:       f64,
    min_chi_square: f64,
}


/// The best split found at a node.
#[derive(Debug, Clone, Copy)]
struct Split {
    feature:          usize,
    gain:             f64,
    positive_entropy: f64,
    negative_entropy: f64,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(min_gain: f64, min_chi_square: f64) -> Self {
        Self { min_gain, min_chi_square, }
    }


    /// The minimal information gain to split a node.
    pub fn min_gain(&self) -> f64 {
        self.min_gain
    }


    /// The minimal chi-square statistic to split a node.
    pub fn min_chi_square(&self) -> f64 {
        self.min_chi_square
    }


    /// Grow a subtree on `instances`.
    /// `used` holds the features tested on the path from the root
    /// and `entropy` is the label entropy of `instances`.
    fn grow(
        &self,
        instances: &[&Instance],
        used:      FixedBitSet,
        entropy:   f64,
    ) -> Box<Node>
    {
        let n_feature = used.len();

        // Every feature is tested on the path to this node.
        if used.count_ones(..) == n_feature {
            return Box::new(Node::leaf(majority_label(instances)));
        }

        let (n_pos, n_neg) = count_labels(instances);
        if chi_square(n_pos, n_neg) < self.min_chi_square {
            return Box::new(Node::leaf(n_pos > n_neg));
        }

        let best = best_split(instances, &used, entropy)
            .filter(|split| split.gain >= self.min_gain);
        let Some(best) = best else {
            return Box::new(Node::leaf(n_pos > n_neg));
        };

        let (positive, negative) = split(instances, best.feature);

        let mut used = used;
        used.insert(best.feature);

        let positive = self.grow(
            &positive, used.clone(), best.positive_entropy
        );
        let negative = self.grow(
            &negative, used, best.negative_entropy
        );

        Box::new(Node::branch(best.feature, positive, negative))
    }
}


/// Returns the untested feature with the maximal information gain.
/// Features whose split leaves a side empty and
/// features with non-positive gain are never returned.
/// Among equal gains, the smallest feature index wins.
fn best_split(instances: &[&Instance], used: &FixedBitSet, entropy: f64)
    -> Option<Split>
{
    let n_sample = instances.len() as f64;

    (0..used.len()).into_par_iter()
        .filter(|&f| !used.contains(f))
        .filter_map(|f| {
            // `counts[side][label]`, `side == 1` iff the feature is `1`.
            let mut counts = [[0usize; 2]; 2];
            for inst in instances {
                let side = usize::from(inst.feature(f));
                let label = usize::from(inst.label());
                counts[side][label] += 1;
            }
            let [neg, pos] = counts;
            let n_positive = pos[0] + pos[1];
            let n_negative = neg[0] + neg[1];

            if n_positive == 0 || n_negative == 0 {
                return None;
            }

            let positive_entropy = binary_entropy(pos[1], pos[0]);
            let negative_entropy = binary_entropy(neg[1], neg[0]);
            let gain = entropy
                - (n_positive as f64 / n_sample) * positive_entropy
                - (n_negative as f64 / n_sample) * negative_entropy;

            // Numerical errors can lead to tiny negative gains.
            if gain <= 0f64 {
                return None;
            }

            Some(Split { feature: f, gain, positive_entropy, negative_entropy })
        })
        .reduce_with(|a, b| {
            let b_wins = b.gain > a.gain
                || (b.gain == a.gain && b.feature < a.feature);
            if b_wins { b } else { a }
        })
}


impl Learner for DecisionTree {
    type Model = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree (ID3)"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Min. gain", format!("{}", self.min_gain)),
            ("Min. chi-square", format!("{}", self.min_chi_square)),
        ]);
        Some(info)
    }


    fn train(&self, instances: &[&Instance]) -> Result<Self::Model> {
        let n_feature = checker::instances(instances)?;

        let used = FixedBitSet::with_capacity(n_feature);
        let root = self.grow(instances, used, entropy(instances));

        Ok(DecisionTreeClassifier::from(root))
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree (ID3)\n\n\
            - Min. gain: {}\n\
            - Min. chi-square: {}\n\
            ----------\
            ",
            self.min_gain,
            self.min_chi_square,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{DEFAULT_MIN_GAIN, DEFAULT_MIN_CHI_SQUARE};

    const TEST_TOLERANCE: f64 = 1e-9;

    fn instances(rows: &[(u8, &[u8])]) -> Vec<Instance> {
        rows.iter()
            .enumerate()
            .map(|(i, (y, x))| Instance::new(format!("i{i}"), *y, x).unwrap())
            .collect()
    }

    #[test]
    fn test_best_split_01() {
        // Feature 1 separates the labels, feature 0 is noise.
        let insts = instances(&[
            (1, &[1, 1]),
            (1, &[0, 1]),
            (0, &[1, 0]),
            (0, &[0, 0]),
        ]);
        let refs = insts.iter().collect::<Vec<_>>();
        let used = FixedBitSet::with_capacity(2);

        let best = best_split(&refs, &used, entropy(&refs)).unwrap();
        assert_eq!(best.feature, 1);
        assert!((best.gain - 1f64).abs() < TEST_TOLERANCE);
        assert_eq!(best.positive_entropy, 0f64);
        assert_eq!(best.negative_entropy, 0f64);
    }

    #[test]
    fn test_best_split_skips_used_and_degenerate() {
        let insts = instances(&[
            (1, &[1, 1, 1]),
            (1, &[0, 1, 1]),
            (0, &[1, 0, 1]),
            (0, &[0, 0, 1]),
        ]);
        let refs = insts.iter().collect::<Vec<_>>();

        // Feature 2 never separates anything,
        // feature 0 has zero gain.
        let mut used = FixedBitSet::with_capacity(3);
        used.insert(1);
        assert!(best_split(&refs, &used, entropy(&refs)).is_none());
    }

    #[test]
    fn test_best_split_tie_prefers_smallest_feature() {
        let insts = instances(&[
            (1, &[1, 1]),
            (0, &[0, 0]),
        ]);
        let refs = insts.iter().collect::<Vec<_>>();
        let used = FixedBitSet::with_capacity(2);

        let best = best_split(&refs, &used, entropy(&refs)).unwrap();
        assert_eq!(best.feature, 0);
    }

    #[test]
    fn test_no_features() {
        let insts = instances(&[(1, &[]), (1, &[]), (0, &[])]);
        let refs = insts.iter().collect::<Vec<_>>();

        let tree = DecisionTree::new(0.05, 0.211);
        let f = tree.train(&refs).unwrap();
        assert_eq!(f.root(), &Node::leaf(true));
    }

    #[test]
    fn test_chi_square_stop_uses_strict_majority() {
        // 3 : 2 gives chi-square 0.2 < 0.211.
        let insts = instances(&[
            (1, &[1]),
            (1, &[1]),
            (1, &[1]),
            (0, &[0]),
            (0, &[0]),
        ]);
        let refs = insts.iter().collect::<Vec<_>>();

        let tree = DecisionTree::new(0.05, 0.211);
        let f = tree.train(&refs).unwrap();
        assert_eq!(f.root(), &Node::leaf(true));

        let tree = DecisionTree::new(0.05, 0f64);
        let f = tree.train(&refs).unwrap();
        assert_eq!(f.depth(), 1);
    }

    #[test]
    fn test_min_gain_stop() {
        // 7 : 3 gives chi-square 1.6, so only the gain threshold can stop.
        // Feature 0 splits into 3 : 1 and 4 : 2, a gain far below 0.05.
        let insts = instances(&[
            (1, &[1]), (1, &[1]), (1, &[1]),
            (1, &[0]), (1, &[0]), (1, &[0]), (1, &[0]),
            (0, &[1]),
            (0, &[0]), (0, &[0]),
        ]);
        let refs = insts.iter().collect::<Vec<_>>();

        let best = best_split(&refs, &FixedBitSet::with_capacity(1), entropy(&refs))
            .unwrap();
        assert!(best.gain > 0f64 && best.gain < DEFAULT_MIN_GAIN);

        let f = DecisionTree::new(DEFAULT_MIN_GAIN, DEFAULT_MIN_CHI_SQUARE)
            .train(&refs)
            .unwrap();
        assert_eq!(f.root(), &Node::leaf(true));

        let expected = Node::branch(
            0,
            Box::new(Node::leaf(true)),
            Box::new(Node::leaf(true)),
        );
        let f = DecisionTree::new(0f64, DEFAULT_MIN_CHI_SQUARE)
            .train(&refs)
            .unwrap();
        assert_eq!(f.root(), &expected);

        // A gain equal to the threshold still splits.
        let f = DecisionTree::new(best.gain, DEFAULT_MIN_CHI_SQUARE)
            .train(&refs)
            .unwrap();
        assert_eq!(f.root(), &expected);
    }

    #[test]
    fn test_display() {
        let tree = DecisionTree::new(0.05, 0.211);
        let text = format!("{tree}");
        assert!(text.contains("Min. gain: 0.05"));
        assert!(text.contains("Min. chi-square: 0.211"));
    }
}

use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops::{Add, AddAssign, Index};


/// A `2 x 2` table of counts indexed by `(true label, predicted label)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: [[usize; 2]; 2],
}


impl ConfusionMatrix {
    /// Construct an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }


    /// Count one prediction.
    #[inline]
    pub fn record(&mut self, actual: bool, predicted: bool) {
        self.counts[usize::from(actual)][usize::from(predicted)] += 1;
    }


    /// The number of predictions counted so far.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }


    /// `matrix[1][1]`
    pub fn true_positives(&self) -> usize {
        self.counts[1][1]
    }


    /// `matrix[0][0]`
    pub fn true_negatives(&self) -> usize {
        self.counts[0][0]
    }


    /// `matrix[0][1]`
    pub fn false_positives(&self) -> usize {
        self.counts[0][1]
    }


    /// `matrix[1][0]`
    pub fn false_negatives(&self) -> usize {
        self.counts[1][0]
    }


    /// `(TP + TN) / total`.
    pub fn accuracy(&self) -> f64 {
        self.ratio(self.true_positives() + self.true_negatives())
    }


    /// `FP / total`.
    pub fn false_positive_rate(&self) -> f64 {
        self.ratio(self.false_positives())
    }


    /// `FN / total`.
    pub fn false_negative_rate(&self) -> f64 {
        self.ratio(self.false_negatives())
    }


    /// Every rate of an empty matrix is `0`.
    fn ratio(&self, count: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0f64;
        }
        count as f64 / total as f64
    }
}


impl Index<(bool, bool)> for ConfusionMatrix {
    type Output = usize;
    fn index(&self, (actual, predicted): (bool, bool)) -> &Self::Output {
        &self.counts[usize::from(actual)][usize::from(predicted)]
    }
}


impl Add for ConfusionMatrix {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}


impl AddAssign for ConfusionMatrix {
    fn add_assign(&mut self, rhs: Self) {
        for (row, other) in self.counts.iter_mut().zip(rhs.counts) {
            for (count, x) in row.iter_mut().zip(other) {
                *count += x;
            }
        }
    }
}


impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[tn, fp], [fn_, tp]] = self.counts;
        write!(f, "[[{tn}, {fp}], [{fn_}, {tp}]]")
    }
}

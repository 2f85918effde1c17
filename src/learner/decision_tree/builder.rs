use crate::DecisionTree;
use crate::common::checker;
use crate::error::Result;


/// The minimal information gain set as default.
pub const DEFAULT_MIN_GAIN: f64 = 0.05;
/// The minimal chi-square statistic set as default.
/// This is the critical value with 1 degree of freedom for `p = 0.1`.
pub const DEFAULT_MIN_CHI_SQUARE: f64 = 0.211;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minilearn::DecisionTreeBuilder;
///
/// let learner = DecisionTreeBuilder::new()
///     .min_gain(0.05)
///     .min_chi_square(3.841)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTreeBuilder {
    min_gain:       f64,
    min_chi_square: f64,
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// min_gain: DEFAULT_MIN_GAIN == 0.05,
    /// min_chi_square: DEFAULT_MIN_CHI_SQUARE == 0.211,
    /// ```
    pub fn new() -> Self {
        Self {
            min_gain:       DEFAULT_MIN_GAIN,
            min_chi_square: DEFAULT_MIN_CHI_SQUARE,
        }
    }


    /// Set the minimal information gain to split a node.
    pub fn min_gain(mut self, min_gain: f64) -> Self {
        self.min_gain = min_gain;
        self
    }


    /// Set the minimal chi-square statistic to split a node.
    pub fn min_chi_square(mut self, min_chi_square: f64) -> Self {
        self.min_chi_square = min_chi_square;
        self
    }


    /// Disable both pruning rules.
    /// The resulting tree splits while some feature has positive gain.
    pub fn without_pruning(self) -> Self {
        self.min_gain(0f64)
            .min_chi_square(0f64)
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// if a threshold is negative or not finite.
    pub fn build(self) -> Result<DecisionTree> {
        checker::threshold("min_gain", self.min_gain)?;
        checker::threshold("min_chi_square", self.min_chi_square)?;

        Ok(DecisionTree::new(self.min_gain, self.min_chi_square))
    }
}

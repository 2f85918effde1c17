use rand::prelude::*;
use rayon::prelude::*;
use colored::Colorize;

use crate::{Classifier, Instance, Learner, DecisionTreeBuilder};
use crate::common::checker;
use crate::error::{Error, Result};
use super::confusion_matrix::ConfusionMatrix;
use super::report::{FoldReport, Prediction, Summary};


/// The number of folds set as default.
pub const DEFAULT_N_FOLDS: usize = 5;
/// The seed of the shuffling set as default.
pub const DEFAULT_SEED: u64 = 1234;

const WIDTH: usize = 9;


/// A struct that runs k-fold cross-validation.
///
/// The instances are cut into contiguous test folds of
/// `ceil(N / n_folds)` instances (the last fold may be smaller);
/// the training set of a fold is every other instance.
/// Fewer than `n_folds` folds are produced when
/// the fold size does not divide `N` evenly enough.
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
///     .build()
///     .unwrap();
///
/// let reports = CrossValidation::new(sample.instances())
///     .n_folds(10)
///     .seed(777)
///     .shuffle()
///     .verbose(true)
///     .evaluate(&tree)
///     .unwrap();
///
/// let summary = Summary::new(&reports);
/// println!("mean accuracy: {:.3}", summary.mean_accuracy);
/// ```
pub struct CrossValidation<'a> {
    n_folds: usize,
    seed: u64,
    instances: &'a [Instance],
    ix: Vec<usize>,
    verbose: bool,
    trace: bool,
}


/// A pair of training/test instances.
#[derive(Debug, Clone)]
pub struct Fold<'a> {
    /// 0-indexed fold number.
    pub index: usize,
    /// Every instance outside of the test block.
    pub train: Vec<&'a Instance>,
    /// The held-out block.
    pub test: Vec<&'a Instance>,
}


/// An iterator over the folds of a [`CrossValidation`].
pub struct Folds<'a> {
    instances: &'a [Instance],
    ix: &'a [usize],
    fold_size: usize,
    start: usize,
    index: usize,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    /// The instances are folded in the given order
    /// unless [`CrossValidation::shuffle`] is called.
    #[inline]
    pub fn new(instances: &'a [Instance]) -> Self {
        let ix = (0..instances.len()).collect::<Vec<_>>();
        Self {
            n_folds: DEFAULT_N_FOLDS,
            seed: DEFAULT_SEED,
            verbose: false,
            trace: false,
            instances,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self
    }


    /// Hold out one instance per fold.
    #[inline]
    pub fn leave_one_out(mut self) -> Self {
        self.n_folds = self.instances.len();
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default value is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints the result of each fold
    /// and the summary after evaluation.
    /// Default value is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Set the trace parameter.
    /// If `true`, the prediction for every test instance is recorded
    /// in [`FoldReport::predictions`] and printed after evaluation
    /// as `id label predicted`.
    /// Default value is `false.`
    #[inline]
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }


    /// Shuffle the instances before folding.
    /// By default, `CrossValidation` does not shuffle the instances.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// The number of test instances per fold, `ceil(N / n_folds)`.
    #[inline]
    pub fn fold_size(&self) -> usize {
        self.instances.len().div_ceil(self.n_folds.max(1))
    }


    /// Returns an iterator over the training/test pairs.
    /// Returns an error if there are no instances or `n_folds < 1`.
    pub fn folds(&self) -> Result<Folds<'_>> {
        if self.instances.is_empty() {
            return Err(Error::EmptySample);
        }
        checker::positive("n_folds", self.n_folds)?;

        let folds = Folds {
            instances: self.instances,
            ix: &self.ix[..],
            fold_size: self.fold_size(),
            start: 0,
            index: 0,
        };
        Ok(folds)
    }


    /// Trains a fresh model with `learner` on each training set
    /// and evaluates it on the corresponding test fold.
    /// Folds run in parallel; the reports are in fold order.
    pub fn evaluate<L>(&self, learner: &L) -> Result<Vec<FoldReport>>
        where L: Learner + Sync,
    {
        let folds = self.folds()?.collect::<Vec<_>>();

        let reports = folds.into_par_iter()
            .map(|fold| self.run_fold(learner, fold))
            .collect::<Result<Vec<_>>>()?;

        if self.verbose || self.trace {
            self.print_reports(learner, &reports);
        }

        Ok(reports)
    }


    fn run_fold<L>(&self, learner: &L, fold: Fold<'_>) -> Result<FoldReport>
        where L: Learner,
    {
        let model = learner.train(&fold.train)?;

        let mut matrix = ConfusionMatrix::new();
        let mut predictions = Vec::new();
        for instance in fold.test.iter() {
            let predicted = model.classify(instance);
            matrix.record(instance.label(), predicted);
            if self.trace {
                predictions.push(Prediction::new(instance, predicted));
            }
        }

        let report = FoldReport {
            fold: fold.index,
            train_size: fold.train.len(),
            test_size: fold.test.len(),
            matrix,
            predictions,
        };
        Ok(report)
    }


    fn print_reports<L>(&self, learner: &L, reports: &[FoldReport])
        where L: Learner,
    {
        if self.verbose {
            println!("{}", format!("  [{}]", learner.name()).bold());
            for (key, value) in learner.info().unwrap_or_default() {
                println!("    - {key}: {value}");
            }
        }
        for report in reports {
            if self.trace {
                for p in report.predictions.iter() {
                    let label = u8::from(p.label);
                    let predicted = u8::from(p.predicted);
                    println!("{} {label} {predicted}", p.id);
                }
            }
            if self.verbose {
                println!(
                    "{}    {}    {}    acc:{:.3} fpr:{:.3} fnr:{:.3}",
                    format!("  [{: >3}'th fold]", report.fold + 1).bold().red(),
                    format!("[TRAIN {:>WIDTH$}]", report.train_size).bold().green(),
                    format!("[TEST {:>WIDTH$}]", report.test_size).bold().yellow(),
                    report.accuracy(),
                    report.false_positive_rate(),
                    report.false_negative_rate(),
                );
            }
        }
        if self.verbose {
            let summary = Summary::new(reports);
            println!(
                "{}    {}    acc:{:.3} fpr:{:.3} fnr:{:.3}",
                format!("  [{: >3} folds]", summary.n_folds).bold().cyan(),
                format!("{}", summary.matrix).bold(),
                summary.mean_accuracy,
                summary.mean_false_positive_rate,
                summary.mean_false_negative_rate,
            );
        }
    }
}


impl<'a> Iterator for Folds<'a> {
    type Item = Fold<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let n_sample = self.ix.len();
        if self.start >= n_sample { return None; }

        let end = (self.start + self.fold_size).min(n_sample);
        let (start, index) = (self.start, self.index);

        let train = self.ix[..start].iter()
            .chain(&self.ix[end..])
            .map(|&i| &self.instances[i])
            .collect::<Vec<_>>();
        let test = self.ix[start..end].iter()
            .map(|&i| &self.instances[i])
            .collect::<Vec<_>>();

        self.start = end;
        self.index += 1;

        Some(Fold { index, train, test })
    }
}


/// Runs `k`-fold cross-validation of the decision tree
/// with the default thresholds on `instances` in the given order.
pub fn evaluate(instances: &[Instance], k: usize) -> Result<Vec<FoldReport>> {
    let tree = DecisionTreeBuilder::new().build()?;
    CrossValidation::new(instances)
        .n_folds(k)
        .evaluate(&tree)
}

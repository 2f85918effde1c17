use serde::{Serialize, Deserialize};

use crate::Instance;
use crate::error::Result;
use super::confusion_matrix::ConfusionMatrix;


/// The prediction for one test instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// The identifier of the instance.
    pub id: String,
    /// The true label.
    pub label: bool,
    /// The predicted label.
    pub predicted: bool,
}


impl Prediction {
    pub(crate) fn new(instance: &Instance, predicted: bool) -> Self {
        Self {
            id: instance.id().to_string(),
            label: instance.label(),
            predicted,
        }
    }
}


/// The evaluation result of one fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldReport {
    /// 0-indexed fold number.
    pub fold: usize,
    /// The number of training instances.
    pub train_size: usize,
    /// The number of test instances.
    pub test_size: usize,
    /// Counts of `(true label, predicted label)` over the test instances.
    pub matrix: ConfusionMatrix,
    /// Per-instance predictions.
    /// Recorded only when tracing is enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub predictions: Vec<Prediction>,
}


impl FoldReport {
    /// `(TP + TN) / |test|`.
    pub fn accuracy(&self) -> f64 {
        self.matrix.accuracy()
    }


    /// `FP / |test|`.
    pub fn false_positive_rate(&self) -> f64 {
        self.matrix.false_positive_rate()
    }


    /// `FN / |test|`.
    pub fn false_negative_rate(&self) -> f64 {
        self.matrix.false_negative_rate()
    }
}


/// Aggregated results over all folds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The number of folds.
    pub n_folds: usize,
    /// The sum of the confusion matrices of all folds.
    pub matrix: ConfusionMatrix,
    /// Mean of the per-fold accuracies.
    pub mean_accuracy: f64,
    /// Mean of the per-fold false-positive rates.
    pub mean_false_positive_rate: f64,
    /// Mean of the per-fold false-negative rates.
    pub mean_false_negative_rate: f64,
}


impl Summary {
    /// Aggregates the given fold reports.
    /// Every mean of an empty set of reports is `0`.
    pub fn new(reports: &[FoldReport]) -> Self {
        let n_folds = reports.len();
        let matrix = reports.iter()
            .map(|report| report.matrix)
            .fold(ConfusionMatrix::new(), |acc, m| acc + m);

        let mean = |rate: fn(&FoldReport) -> f64| {
            if n_folds == 0 {
                return 0f64;
            }
            reports.iter().map(rate).sum::<f64>() / n_folds as f64
        };

        Self {
            n_folds,
            matrix,
            mean_accuracy: mean(FoldReport::accuracy),
            mean_false_positive_rate: mean(FoldReport::false_positive_rate),
            mean_false_negative_rate: mean(FoldReport::false_negative_rate),
        }
    }
}


impl From<&[FoldReport]> for Summary {
    fn from(reports: &[FoldReport]) -> Self {
        Self::new(reports)
    }
}


/// Renders the fold reports and their summary as a JSON document
/// of the form `{"folds": [...], "summary": {...}}`.
pub fn to_json(reports: &[FoldReport]) -> Result<String> {
    #[derive(Serialize)]
    struct Document<'a> {
        folds: &'a [FoldReport],
        summary: Summary,
    }

    let document = Document { folds: reports, summary: Summary::new(reports) };
    Ok(serde_json::to_string_pretty(&document)?)
}

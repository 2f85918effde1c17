//! Defines the error type shared by every part of this crate.
use polars::prelude::PolarsError;
use thiserror::Error;

/// Result type whose error is [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the boundary of the learners
/// and the cross-validation harness.
#[derive(Debug, Error)]
pub enum Error {
    /// A sample (or a training set) has no instances.
    #[error("the sample has no instances")]
    EmptySample,

    /// An instance has a different number of features
    /// from the rest of the sample.
    #[error("instance `{id}` has {found} features, expected {expected}")]
    FeatureCountMismatch {
        /// The identifier of the offending instance.
        id: String,
        /// The number of features of the first instance.
        expected: usize,
        /// The number of features of the offending instance.
        found: usize,
    },

    /// A label or a feature value is not `0` or `1`.
    #[error("instance `{id}` has non-binary value `{value}` in {column}")]
    NonBinaryValue {
        /// The identifier (or the row number) of the instance.
        id: String,
        /// The column holding the value.
        column: String,
        /// The value as written.
        value: String,
    },

    /// A row of a delimited file could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A learner or the harness is configured with a bad parameter.
    #[error("invalid parameter `{name} = {value}`: {reason}")]
    InvalidParameter {
        /// The name of the parameter.
        name: &'static str,
        /// The given value.
        value: String,
        /// Why the value is rejected.
        reason: &'static str,
    },

    /// Reading a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A `DataFrame` could not be converted.
    #[error(transparent)]
    Polars(#[from] PolarsError),

    /// Serializing a report failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

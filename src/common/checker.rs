//! This file defines some functions that checks some pre-conditions
//! E.g., thresholds and the number of folds.

use crate::Instance;
use crate::error::{Error, Result};


/// Check whether the training instances are valid or not.
/// Returns the number of features shared by all instances.
#[inline(always)]
pub(crate) fn instances(instances: &[&Instance]) -> Result<usize> {
    let n_feature = instances.first()
        .map(|inst| inst.n_features())
        .ok_or(Error::EmptySample)?;

    match instances.iter().find(|inst| inst.n_features() != n_feature) {
        Some(inst) => Err(Error::FeatureCountMismatch {
            id: inst.id().to_string(),
            expected: n_feature,
            found: inst.n_features(),
        }),
        None => Ok(n_feature),
    }
}


/// Check whether a pruning threshold is finite and non-negative.
#[inline(always)]
pub(crate) fn threshold(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "threshold must be finite",
        });
    }
    if value < 0f64 {
        return Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "threshold must be non-negative",
        });
    }
    Ok(())
}


/// Check whether a count parameter (the number of folds, neighbors)
/// is at least `1`.
#[inline(always)]
pub(crate) fn positive(name: &'static str, value: usize) -> Result<()> {
    if value < 1 {
        return Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "must be at least 1",
        });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_success_01() {
        threshold("min_gain", 0.05).unwrap();
    }

    #[test]
    fn test_threshold_success_02() {
        threshold("min_gain", 0f64).unwrap();
    }

    #[test]
    fn test_threshold_failure_01() {
        assert!(threshold("min_gain", -0.0001).is_err());
    }

    #[test]
    fn test_threshold_failure_02() {
        assert!(threshold("min_chi_square", f64::NAN).is_err());
    }

    #[test]
    fn test_threshold_failure_03() {
        assert!(threshold("min_chi_square", f64::INFINITY).is_err());
    }

    #[test]
    fn test_instances() {
        let a = Instance::new("a", 1, &[1, 0]).unwrap();
        let b = Instance::new("b", 0, &[0, 0]).unwrap();
        let c = Instance::new("c", 0, &[0]).unwrap();
        assert_eq!(instances(&[&a, &b]).unwrap(), 2);
        assert!(matches!(instances(&[]), Err(Error::EmptySample)));
        assert!(matches!(
            instances(&[&a, &c]),
            Err(Error::FeatureCountMismatch { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_positive() {
        positive("n_folds", 1).unwrap();
        let err = positive("n_folds", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "n_folds", .. }));
    }
}

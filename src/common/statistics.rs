//! Label statistics over a set of binary instances.
//!
//! Every function here takes a slice of references
//! so that a set can be partitioned without copying instances.
use crate::Instance;


/// Returns `(n_pos, n_neg)`,
/// the number of instances labeled `1` and `0`, respectively.
#[inline]
pub fn count_labels(instances: &[&Instance]) -> (usize, usize) {
    let n_pos = instances.iter()
        .filter(|inst| inst.label())
        .count();
    (n_pos, instances.len() - n_pos)
}


/// Binary Shannon entropy (base 2) of the label distribution
/// `n_pos : n_neg`.
/// Returns `0` for an empty or a pure distribution;
/// `log2(0)` is never evaluated.
#[inline]
pub fn binary_entropy(n_pos: usize, n_neg: usize) -> f64 {
    if n_pos == 0 || n_neg == 0 {
        return 0f64;
    }
    let total = (n_pos + n_neg) as f64;

    let p = n_pos as f64 / total;
    let q = n_neg as f64 / total;
    -p * p.log2() - q * q.log2()
}


/// Entropy of the label distribution of `instances`.
#[inline]
pub fn entropy(instances: &[&Instance]) -> f64 {
    let (n_pos, n_neg) = count_labels(instances);
    binary_entropy(n_pos, n_neg)
}


/// Chi-square statistic of `n_pos : n_neg`
/// against the even `50/50` split (1 degree of freedom).
/// Returns `0` for an empty distribution.
#[inline]
pub fn chi_square(n_pos: usize, n_neg: usize) -> f64 {
    let avg = (n_pos + n_neg) as f64 / 2f64;
    if avg == 0f64 {
        return 0f64;
    }
    let dpos = n_pos as f64 - avg;
    let dneg = n_neg as f64 - avg;
    (dpos * dpos + dneg * dneg) / avg
}


/// Partitions `instances` into the ones whose `feature`th value is `1`
/// and the ones whose value is `0`.
pub fn split<'a>(instances: &[&'a Instance], feature: usize)
    -> (Vec<&'a Instance>, Vec<&'a Instance>)
{
    instances.iter()
        .copied()
        .partition(|inst| inst.feature(feature))
}


/// Returns `true` if positives strictly outnumber negatives.
/// Ties resolve to `false`.
#[inline]
pub fn majority_label(instances: &[&Instance]) -> bool {
    let (n_pos, n_neg) = count_labels(instances);
    n_pos > n_neg
}

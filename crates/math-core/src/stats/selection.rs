//! Quantified selection of the smallest or largest values.

use super::sorted_ascending;

/// Number of items to take for a quantifier, clamped to `0..=len`.
fn take_count(q: i64, len: usize) -> usize {
    usize::try_from(q.max(0)).map_or(len, |q| q.min(len))
}

/// Return the `q` smallest values in ascending order.
///
/// A non-positive `q` yields an empty result; a `q` larger than the list
/// yields the whole list.
///
/// # Examples
///
/// ```
/// use math_core::stats::selection::min_n;
///
/// assert_eq!(min_n(&[70.0, 30.0, 80.0, 50.0, 90.0], 1), vec![30.0]);
/// assert!(min_n(&[1.0, 2.0], 0).is_empty());
/// ```
pub fn min_n(samples: &[f64], q: i64) -> Vec<f64> {
    let mut sorted = sorted_ascending(samples);
    sorted.truncate(take_count(q, samples.len()));
    sorted
}

/// Return the `q` largest values in descending order.
///
/// Same clamping as [`min_n`].
///
/// # Examples
///
/// ```
/// use math_core::stats::selection::max_n;
///
/// assert_eq!(max_n(&[70.0, 30.0, 80.0, 50.0, 90.0], 2), vec![90.0, 80.0]);
/// ```
pub fn max_n(samples: &[f64], q: i64) -> Vec<f64> {
    let mut sorted = sorted_ascending(samples);
    sorted.reverse();
    sorted.truncate(take_count(q, samples.len()));
    sorted
}

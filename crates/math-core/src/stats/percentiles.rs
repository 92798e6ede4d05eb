//! Nearest-rank percentile.
//!
//! Unlike interpolating estimators, nearest-rank always returns a value that
//! is present in the input.

use super::sorted_ascending;
use crate::error::{Result, StatsError};

/// 1-indexed rank of the `q`th percentile in a list of `len` values.
///
/// `q` is clamped to `0..=100` and the rank to `1..=len`, so the 0th
/// percentile is the smallest value and the 100th the largest. Returns 0
/// only when `len` is 0.
///
/// # Examples
///
/// ```
/// use math_core::stats::percentiles::nearest_rank;
///
/// assert_eq!(nearest_rank(90, 20), 18);
/// assert_eq!(nearest_rank(0, 20), 1);
/// assert_eq!(nearest_rank(250, 20), 20);
/// ```
pub fn nearest_rank(q: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    // ceil(q * len / 100) in integer arithmetic avoids 0.9 * 20 style rounding
    let q = q.clamp(0, 100) as u128;
    let rank = (q * len as u128).div_ceil(100);

    (rank as usize).clamp(1, len)
}

/// Calculate the `q`th percentile of `samples` using the nearest-rank method.
///
/// # Arguments
///
/// * `samples` - Slice of samples (sorted internally)
/// * `q` - Percentile to select; values outside `0..=100` are clamped
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `samples` is empty.
///
/// # Examples
///
/// ```
/// use math_core::stats::percentiles::percentile;
///
/// let data = vec![15.0, 20.0, 35.0, 40.0, 50.0];
/// assert_eq!(percentile(&data, 30).unwrap(), 20.0);
/// assert_eq!(percentile(&data, 100).unwrap(), 50.0);
/// ```
pub fn percentile(samples: &[f64], q: i64) -> Result<f64> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput {
            operation: "percentile",
        });
    }

    let sorted = sorted_ascending(samples);
    let rank = nearest_rank(q, sorted.len());

    Ok(sorted[rank - 1])
}

//! Measures of central tendency.

use super::sorted_ascending;
use crate::error::{Result, StatsError};

/// Arithmetic mean of `samples`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `samples` is empty.
///
/// # Examples
///
/// ```
/// use math_core::stats::central::average;
///
/// assert_eq!(average(&[70.0, 30.0, 80.0, 50.0, 90.0]).unwrap(), 64.0);
/// ```
pub fn average(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput {
            operation: "average",
        });
    }

    let sum: f64 = samples.iter().sum();
    Ok(sum / samples.len() as f64)
}

/// Median of `samples`.
///
/// For an even count this is the mean of the two middle values.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `samples` is empty.
///
/// # Examples
///
/// ```
/// use math_core::stats::central::median;
///
/// assert_eq!(median(&[70.0, 30.0, 80.0, 40.0, 50.0, 90.0]).unwrap(), 60.0);
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// ```
pub fn median(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput { operation: "median" });
    }

    Ok(median_of_sorted(&sorted_ascending(samples)))
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Summary statistics for a list of numbers.
///
/// Computed from a single sorted copy; used for request logging.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl Summary {
    /// Compute summary statistics from samples.
    ///
    /// Returns `None` if `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use math_core::stats::Summary;
    ///
    /// let summary = Summary::from_samples(&[4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(summary.count, 4);
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.median, 2.5);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let sorted = sorted_ascending(samples);
        let count = sorted.len();
        let sum: f64 = sorted.iter().sum();

        Some(Summary {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean: sum / count as f64,
            median: median_of_sorted(&sorted),
        })
    }
}

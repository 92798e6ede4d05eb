//! Statistical operations over number lists
//!
//! Every operation works on a sorted copy of its input and leaves the
//! caller's slice untouched, so descriptions can always echo the numbers in
//! the order they were received.
//!
//! # Examples
//!
//! ```
//! use math_core::stats::{average, max_n, median, min_n, percentile};
//!
//! let samples = vec![70.0, 30.0, 80.0, 40.0, 50.0, 90.0];
//!
//! assert_eq!(min_n(&samples, 2), vec![30.0, 40.0]);
//! assert_eq!(max_n(&samples, 1), vec![90.0]);
//! assert_eq!(average(&samples).unwrap(), 60.0);
//! assert_eq!(median(&samples).unwrap(), 60.0);
//! assert_eq!(percentile(&samples, 50).unwrap(), 50.0);
//! ```

pub mod central;
pub mod percentiles;
pub mod selection;

// Re-export main types and functions
pub use central::{average, median, Summary};
pub use percentiles::{nearest_rank, percentile};
pub use selection::{max_n, min_n};

/// Sorted working copy of `samples`, ascending.
///
/// Uses IEEE total ordering so NaN values sort to a fixed position instead of
/// making the order depend on the input.
pub(crate) fn sorted_ascending(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

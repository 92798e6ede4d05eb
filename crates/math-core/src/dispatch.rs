//! Request dispatch: operation name to statistics call.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, Level};

use crate::describe::{format_list, serialize_results};
use crate::error::{Result, StatsError};
use crate::stats::{self, Summary};

/// Input for a single calculation.
///
/// `numbers` keeps the order the client sent them in; the quantifier is a
/// count for min/max, a percentile for percentile, and ignored otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub numbers: Vec<f64>,
    pub quantifier: i64,
}

impl CalculationRequest {
    pub fn new(numbers: Vec<f64>, quantifier: i64) -> Self {
        Self {
            numbers,
            quantifier,
        }
    }
}

/// Output of a calculation, serialized as the response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Results", serialize_with = "serialize_results")]
    pub results: Vec<f64>,
}

/// Supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Min,
    Max,
    Avg,
    Median,
    Percentile,
}

impl Operation {
    /// All operations in routing order.
    pub const ALL: [Operation; 5] = [
        Operation::Min,
        Operation::Max,
        Operation::Avg,
        Operation::Median,
        Operation::Percentile,
    ];

    /// Name used on the wire (`"avg"`, `"percentile"`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Operation::Min => "min",
            Operation::Max => "max",
            Operation::Avg => "avg",
            Operation::Median => "median",
            Operation::Percentile => "percentile",
        }
    }

    /// HTTP route serving this operation
    pub fn route(self) -> &'static str {
        match self {
            Operation::Min => "/min",
            Operation::Max => "/max",
            Operation::Avg => "/avg",
            Operation::Median => "/median",
            Operation::Percentile => "/percentile",
        }
    }

    /// One-line description shown on the index page
    pub fn purpose(self) -> &'static str {
        match self {
            Operation::Min => {
                "Given list of numbers and a quantifier (how many) provides min number(s)"
            }
            Operation::Max => {
                "Given list of numbers and a quantifier (how many) provides max number(s)"
            }
            Operation::Avg => "Given list of numbers calculates their average",
            Operation::Median => "Given list of numbers calculates their median",
            Operation::Percentile => {
                "Given list of numbers and quantifier 'q', compute the qth percentile of the list elements"
            }
        }
    }

    /// Run the operation and build its result.
    ///
    /// The description echoes `request.numbers` in the order received, and
    /// the quantifier as given (before any clamping).
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] for average, median and percentile
    /// over an empty list. Min and max return an empty result instead.
    pub fn evaluate(self, request: &CalculationRequest) -> Result<CalculationResult> {
        let numbers = &request.numbers;
        let q = request.quantifier;
        let list = format_list(numbers);

        if tracing::enabled!(Level::DEBUG) {
            if let Some(summary) = Summary::from_samples(numbers) {
                debug!(
                    "{} over {} numbers (min={}, max={}, mean={})",
                    self, summary.count, summary.min, summary.max, summary.mean
                );
            }
        }

        let (description, results) = match self {
            Operation::Min => (
                format!("Min of {} with quantifier {}", list, q),
                stats::min_n(numbers, q),
            ),
            Operation::Max => (
                format!("Max of {} with quantifier {}", list, q),
                stats::max_n(numbers, q),
            ),
            Operation::Avg => (
                format!("Average of {}", list),
                vec![stats::average(numbers)?],
            ),
            Operation::Median => (
                format!("Median of {}", list),
                vec![stats::median(numbers)?],
            ),
            Operation::Percentile => (
                format!("{}th percentile of {}", q, list),
                vec![stats::percentile(numbers, q)?],
            ),
        };

        Ok(CalculationResult {
            description,
            results,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| StatsError::UnknownOperation(s.to_string()))
    }
}

/// Look up an operation by name and run it.
///
/// # Examples
///
/// ```
/// use math_core::{dispatch, CalculationRequest};
///
/// let request = CalculationRequest::new(vec![70.0, 30.0, 80.0, 50.0, 90.0], 0);
/// let result = dispatch("avg", &request).unwrap();
/// assert_eq!(result.results, vec![64.0]);
///
/// assert!(dispatch("mode", &request).is_err());
/// ```
pub fn dispatch(name: &str, request: &CalculationRequest) -> Result<CalculationResult> {
    name.parse::<Operation>()?.evaluate(request)
}

//! Core computations for the math-api server
//!
//! This crate holds everything with real semantics behind the HTTP surface:
//!
//! - **Parsing**: comma-separated numbers and integer quantifiers from raw
//!   query values, with lenient fallbacks
//! - **Statistics**: min-N, max-N, average, median and nearest-rank percentile
//! - **Dispatch**: mapping an operation name to a computation and building the
//!   human-readable description returned to clients
//!
//! # Example
//!
//! ```
//! use math_core::{parse_numbers, CalculationRequest, Operation};
//!
//! let request = CalculationRequest::new(parse_numbers("70,30,80,50,90"), 1);
//! let result = Operation::Min.evaluate(&request).unwrap();
//!
//! assert_eq!(result.description, "Min of []float64{70, 30, 80, 50, 90} with quantifier 1");
//! assert_eq!(result.results, vec![30.0]);
//! ```

pub mod describe;
pub mod dispatch;
pub mod error;
pub mod parser;
pub mod stats;

// Re-export main types for convenience
pub use dispatch::{dispatch, CalculationRequest, CalculationResult, Operation};
pub use error::StatsError;
pub use parser::{parse_numbers, parse_quantifier};

//! Error types for math-core

use thiserror::Error;

/// Errors raised while computing a statistic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The statistic has no defined value for an empty list
    #[error("cannot compute {operation} of an empty list")]
    EmptyInput { operation: &'static str },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;

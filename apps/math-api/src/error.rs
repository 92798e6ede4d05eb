//! Error types for the math-api server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use math_core::StatsError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

/// Body of every 404, matching the plain-text response clients already see
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::EmptyInput(message) => {
                let body = ErrorResponse {
                    success: false,
                    error: message,
                    code: "EMPTY_INPUT".to_string(),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            // Unknown operations look like any other unknown path
            ServerError::UnknownOperation(_) => {
                (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
            }
        }
    }
}

impl From<StatsError> for ServerError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::UnknownOperation(name) => ServerError::UnknownOperation(name),
            other => ServerError::EmptyInput(other.to_string()),
        }
    }
}

//! API handlers for the math-api server
//!
//! Provides endpoints for:
//! - The five statistics operations (`/min`, `/max`, `/avg`, `/median`, `/percentile`)
//! - The index page listing them
//! - Health checks

use std::collections::BTreeMap;
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Html,
    routing::{any, get},
    Json, Router,
};
use math_core::{parse_numbers, parse_quantifier, CalculationRequest, CalculationResult, Operation};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::error::{ServerError, NOT_FOUND_BODY};

/// Raw query pairs in request order, so the first occurrence of a key wins
type QueryPairs = Vec<(String, String)>;

/// Build the application router.
///
/// Any single-segment path other than `/` and `/health` is looked up as an
/// operation name and accepts any method. Unknown names and deeper paths get
/// the plain 404.
pub fn router(request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_index).fallback(handle_index_method_not_allowed))
        .route("/health", get(handle_health))
        .route("/:operation", any(handle_operation))
        .fallback(handle_not_found)
        .layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(TimeoutLayer::new(request_timeout)),
    )
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "math-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: GET /
///
/// A welcome banner followed by the JSON menu of operations.
pub async fn handle_index() -> Html<String> {
    let menu: BTreeMap<&str, &str> = Operation::ALL
        .into_iter()
        .map(|op| (op.route(), op.purpose()))
        .collect();

    // A map of static strings always serializes
    let menu_json = serde_json::to_string(&menu).unwrap_or_default();

    Html(format!(
        "<h1>Welcome to the math-api web server!</h1>{}\n",
        menu_json
    ))
}

/// Handler: any non-GET method on /
pub async fn handle_index_method_not_allowed() -> (StatusCode, &'static str) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        "Only GET requests are allowed!\n",
    )
}

/// Handler: unknown paths
pub async fn handle_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Handler: /min, /max, /avg, /median, /percentile
///
/// Missing parameters are not rejected: `numbers` defaults to an empty list
/// and `quantifier` to 0.
pub async fn handle_operation(
    Path(name): Path<String>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<CalculationResult>, ServerError> {
    let op: Operation = name.parse()?;
    let request = read_request(&params);
    info!(
        "{} request: {} numbers, quantifier={}",
        op,
        request.numbers.len(),
        request.quantifier
    );

    let result = op.evaluate(&request)?;
    debug!("{} result: {:?}", op, result.results);

    Ok(Json(result))
}

/// Build a calculation request from raw query pairs
fn read_request(params: &[(String, String)]) -> CalculationRequest {
    let numbers = query_param(params, "numbers")
        .map(parse_numbers)
        .unwrap_or_default();
    let quantifier = parse_quantifier(query_param(params, "quantifier"));

    CalculationRequest::new(numbers, quantifier)
}

/// First value of a query parameter, logging when it is absent
fn query_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    let value = params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str());

    match value {
        Some(value) => debug!("The query parameter '{}' has value {}", name, value),
        None => info!("The query parameter {} is missing", name),
    }

    value
}

//! Handler functions for the telemetry aggregation API.
//!
//! These functions parse incoming HTTP requests, delegate the actual
//! computation to `services::data_aggregator`, and format the responses.
//! Malformed bodies are rejected with a JSON error rather than silently
//! producing an empty result.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::models::{HealthResponse, MetricsRequest, MetricsResponse};
use crate::errors::ApiError;
use crate::services::data_aggregator;
use crate::AppState;

/// Health probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.records().len(),
    })
}

/// Explicit preflight acknowledgment for callers that probe with a bare
/// `OPTIONS` request; real CORS preflights are answered by the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Aggregation endpoint: filters the dataset per requested region and
/// returns the per-region metrics map.
pub async fn aggregate(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let Json(request) = payload.map_err(|err| ApiError::BadRequest(err.body_text()))?;
    let threshold_ms = request
        .threshold_ms
        .unwrap_or_else(|| state.default_threshold_ms());

    tracing::debug!(
        regions = request.regions.len(),
        threshold_ms,
        "aggregating telemetry query"
    );

    let regions = data_aggregator::compute(state.records(), &request.regions, threshold_ms);
    Ok(Json(MetricsResponse { regions }))
}

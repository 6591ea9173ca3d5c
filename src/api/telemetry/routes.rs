//! Defines the HTTP routes for the telemetry aggregation API.
//!
//! These routes map specific API paths to handler functions. `/telemetry`
//! is an alias for the root aggregation endpoint; both accept the same
//! request body and return the same response shape.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{aggregate, health, preflight};
use crate::AppState;

pub fn telemetry_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health).post(aggregate).options(preflight))
        .route("/telemetry", post(aggregate).options(preflight))
        .with_state(state)
}

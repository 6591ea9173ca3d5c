//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the API domains and
//! assembles the full router, layering the shared CORS and tracing
//! middleware over every route.

pub mod telemetry;

use axum::Router;

use crate::{middleware, AppState};

/// Builds the complete application router. Used by both the server binary
/// and the integration tests, so they always exercise the same surface.
pub fn router(state: AppState) -> Router {
    telemetry::routes::telemetry_router(state)
        .layer(middleware::cors())
        .layer(middleware::trace())
}

//! General-purpose middleware for the API.
//!
//! This module contains reusable middleware components applied to the whole
//! Axum router, so that cross-cutting concerns like CORS and request tracing
//! live in one place instead of being repeated per endpoint.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Permissive CORS for browser callers: any origin, any headers, and the
/// three methods the API serves. Preflight `OPTIONS` requests are answered
/// by this layer before they reach a handler.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn trace() -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
}

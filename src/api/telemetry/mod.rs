//! API domain for telemetry aggregation queries.
//!
//! This module groups the routes, handler functions, and request/response
//! models for the latency-metrics endpoint and its health probe.

pub mod handlers;
pub mod models;
pub mod routes;

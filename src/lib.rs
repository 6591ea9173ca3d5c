//! Library root for the RegionGaze backend.
//!
//! This crate exposes the application's modules so that both the server
//! binary and the integration tests can assemble the same Axum router.
//! It also defines the shared application state handed to every handler.

pub mod api;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod middleware;
pub mod services;

use std::sync::Arc;

use crate::dataset::models::TelemetryRecord;

/// Shared, read-only state for all request handlers.
///
/// The telemetry table is loaded once at startup and never mutated;
/// handlers share it through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    records: Arc<Vec<TelemetryRecord>>,
    default_threshold_ms: f64,
}

impl AppState {
    pub fn new(records: Vec<TelemetryRecord>, default_threshold_ms: f64) -> Self {
        Self {
            records: Arc::new(records),
            default_threshold_ms,
        }
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn default_threshold_ms(&self) -> f64 {
        self.default_threshold_ms
    }
}

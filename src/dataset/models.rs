//! Rust structs that represent the telemetry dataset on disk.
//!
//! These models define the structure of data as it is stored in the bundled
//! JSON file. They are deliberately separate from the API request/response
//! models, which live next to the handlers that use them.

use serde::{Deserialize, Serialize};

/// One telemetry observation from the static dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Deployment zone the observation belongs to (e.g. "apac", "emea").
    pub region: String,
    /// Service that produced the sample. Informational only; aggregation
    /// never partitions by it.
    pub service: String,
    /// Observed request latency in milliseconds. Never negative.
    pub latency_ms: f64,
    /// Observed uptime percentage, expected within 0..=100.
    pub uptime_pct: f64,
    /// Collection timestamp, YYYYMMDD-like but opaque to this service.
    pub timestamp: i64,
}

//! Request and response models for the telemetry aggregation API.
//!
//! These are the wire shapes only; the aggregation output type itself
//! (`RegionMetrics`) lives with the service that computes it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::services::data_aggregator::RegionMetrics;

/// Body of an aggregation query.
#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    /// Regions to aggregate, processed in order; duplicates collapse to a
    /// single entry. May be empty.
    pub regions: Vec<String>,
    /// Breach threshold in milliseconds. Falls back to the configured
    /// default when omitted.
    pub threshold_ms: Option<f64>,
}

/// Response envelope. The region map is wrapped in a `regions` key rather
/// than returned bare, and preserves first-requested order.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub regions: IndexMap<String, RegionMetrics>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
}

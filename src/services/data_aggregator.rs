//! Logic for aggregating telemetry records into per-region metrics.
//!
//! This module filters the in-memory record table by region and computes
//! the latency mean, the 95th-percentile latency, the uptime mean, and the
//! number of threshold breaches. It is pure: no state, no side effects,
//! and identical input always yields identical output.

use indexmap::IndexMap;
use serde::Serialize;

use crate::dataset::models::TelemetryRecord;

/// Aggregated metrics for one requested region.
///
/// Latencies are rounded to 2 decimal places and uptime to 3, using
/// round-half-away-from-zero (`f64::round`) throughout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMetrics {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionMetrics {
    /// Fallback for regions with no matching records. Deliberately not an
    /// error: callers asking about an unknown region get zeroed metrics.
    fn zeroed() -> Self {
        Self {
            avg_latency: 0.0,
            p95_latency: 0.0,
            avg_uptime: 0.0,
            breaches: 0,
        }
    }
}

/// Computes metrics for every requested region.
///
/// The result holds exactly one entry per distinct region name, in the
/// order first requested. Repeats collapse idempotently: filtering by
/// region name is deterministic, so recomputing a duplicate could only
/// reproduce the entry already present.
pub fn compute(
    records: &[TelemetryRecord],
    regions: &[String],
    threshold_ms: f64,
) -> IndexMap<String, RegionMetrics> {
    let mut results = IndexMap::new();
    for region in regions {
        if results.contains_key(region) {
            continue;
        }
        results.insert(region.clone(), region_metrics(records, region, threshold_ms));
    }
    results
}

fn region_metrics(records: &[TelemetryRecord], region: &str, threshold_ms: f64) -> RegionMetrics {
    // Exact, case-sensitive match on the partition key.
    let matched: Vec<&TelemetryRecord> =
        records.iter().filter(|r| r.region == region).collect();
    if matched.is_empty() {
        return RegionMetrics::zeroed();
    }

    let mut latencies: Vec<f64> = matched.iter().map(|r| r.latency_ms).collect();
    latencies.sort_by(|a, b| a.total_cmp(b));

    let latency_sum: f64 = latencies.iter().sum();
    let uptime_sum: f64 = matched.iter().map(|r| r.uptime_pct).sum();
    let count = matched.len() as f64;
    let breaches = latencies.iter().filter(|&&l| l > threshold_ms).count() as u64;

    RegionMetrics {
        avg_latency: round_to(latency_sum / count, 2),
        p95_latency: round_to(percentile_linear(&latencies, 95.0), 2),
        avg_uptime: round_to(uptime_sum / count, 3),
        breaches,
    }
}

/// Percentile by linear interpolation between closest ranks: for a sorted
/// slice of length n the rank is `pct/100 * (n-1)`, zero-indexed, and a
/// fractional rank interpolates between the two neighbouring values.
fn percentile_linear(sorted: &[f64], pct: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let rank = pct / 100.0 * (sorted.len() - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let fraction = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

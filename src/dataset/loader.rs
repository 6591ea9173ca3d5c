//! Startup loading and validation of the bundled telemetry dataset.
//!
//! The dataset is a flat JSON array of records. Loading happens once at
//! process start and any structural problem is fatal; there is no reload
//! or partial-load path.

use std::path::Path;

use crate::dataset::models::TelemetryRecord;
use crate::errors::DatasetError;

/// Reads and validates the dataset at `path`.
pub fn load(path: &Path) -> Result<Vec<TelemetryRecord>, DatasetError> {
    let raw = std::fs::read(path)?;
    parse(&raw)
}

/// Parses a JSON array of telemetry records, rejecting records that violate
/// the dataset contract (empty region, negative latency). Out-of-range
/// uptime values are tolerated but logged, since they only skew averages
/// rather than corrupting them.
pub fn parse(bytes: &[u8]) -> Result<Vec<TelemetryRecord>, DatasetError> {
    let records: Vec<TelemetryRecord> = serde_json::from_slice(bytes)?;
    for (index, record) in records.iter().enumerate() {
        if record.region.is_empty() {
            return Err(DatasetError::InvalidRecord {
                index,
                reason: "empty region".into(),
            });
        }
        if record.latency_ms < 0.0 {
            return Err(DatasetError::InvalidRecord {
                index,
                reason: format!("negative latency_ms {}", record.latency_ms),
            });
        }
        if !(0.0..=100.0).contains(&record.uptime_pct) {
            tracing::warn!(
                region = %record.region,
                service = %record.service,
                uptime_pct = record.uptime_pct,
                "uptime_pct outside expected 0-100 range"
            );
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_valid_records() {
        let raw = br#"[
            {"region":"apac","service":"edge-api","latency_ms":144.12,"uptime_pct":99.373,"timestamp":20250301},
            {"region":"emea","service":"checkout","latency_ms":98.4,"uptime_pct":98.21,"timestamp":20250301}
        ]"#;
        let records = parse(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region, "apac");
        assert_eq!(records[1].latency_ms, 98.4);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse(b"not json"), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn rejects_empty_region() {
        let raw = br#"[{"region":"","service":"s","latency_ms":1.0,"uptime_pct":99.0,"timestamp":1}]"#;
        match parse(raw) {
            Err(DatasetError::InvalidRecord { index, .. }) => assert_eq!(index, 0),
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_latency() {
        let raw = br#"[
            {"region":"apac","service":"s","latency_ms":10.0,"uptime_pct":99.0,"timestamp":1},
            {"region":"apac","service":"s","latency_ms":-0.5,"uptime_pct":99.0,"timestamp":1}
        ]"#;
        match parse(raw) {
            Err(DatasetError::InvalidRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("negative"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"region":"amer","service":"auth","latency_ms":120.0,"uptime_pct":99.9,"timestamp":20250302}]"#)
            .unwrap();
        let records = load(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].region, "amer");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/telemetry.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}

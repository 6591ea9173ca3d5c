//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the server bind address, the path to the bundled telemetry dataset, and
//! the default latency threshold applied when a query omits one.

use config::{Config, Environment};
use serde::Deserialize;

use crate::errors::ConfigError;

/// Runtime configuration, defaulted and overridable via `REGIONGAZE_*`
/// environment variables (e.g. `REGIONGAZE_PORT=8080`).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub dataset_path: String,
    /// Threshold applied when a query omits `threshold_ms`.
    pub default_threshold_ms: f64,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("dataset_path", "data/telemetry.json")?
            .set_default("default_threshold_ms", 180.0)?
            .add_source(Environment::with_prefix("REGIONGAZE"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = AppConfig::load().expect("defaults should satisfy the schema");
        assert_eq!(config.port, 3000);
        assert_eq!(config.dataset_path, "data/telemetry.json");
        assert_eq!(config.default_threshold_ms, 180.0);
    }
}

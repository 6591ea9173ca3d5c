//! Main entry point for the RegionGaze backend.
//!
//! This file initializes the Axum web server, loads the bundled telemetry
//! dataset into memory, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

use std::net::SocketAddr;
use std::path::Path;

use regiongaze::{api, config::AppConfig, dataset, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    let records = match dataset::loader::load(Path::new(&config.dataset_path)) {
        Ok(records) => records,
        Err(err) => {
            tracing::error!(path = %config.dataset_path, "failed to load dataset: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        records = records.len(),
        path = %config.dataset_path,
        "telemetry dataset loaded"
    );

    let state = AppState::new(records, config.default_threshold_ms);
    let app = api::router(state);

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!(host = %config.host, port = config.port, "invalid bind address: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

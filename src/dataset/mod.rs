//! Module for the bundled telemetry dataset.
//!
//! This module groups the record model and the startup loader. The dataset
//! is read from disk exactly once, validated, and then shared immutably
//! across all request handlers for the life of the process.

pub mod loader;
pub mod models;

//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business
//! operations, currently the aggregation of raw telemetry records into
//! per-region metrics for API consumption.

pub mod data_aggregator;

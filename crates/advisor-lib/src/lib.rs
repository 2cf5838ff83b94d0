//! Advisor library for Kubernetes resource optimization
//!
//! This crate provides the core functionality for:
//! - Building PromQL queries for workload CPU/memory metrics
//! - Querying a Prometheus-compatible HTTP API
//! - Joining usage against configured requests per workload
//! - Threshold-based optimization suggestions

pub mod analysis;
pub mod error;
pub mod models;
pub mod prometheus;

pub use analysis::{analyze, evaluate, Thresholds, UsageSnapshot};
pub use error::{Error, Result};
pub use models::*;
pub use prometheus::{MetricQuery, PrometheusClient, Series, WorkloadSelector};

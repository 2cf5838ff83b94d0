//! Prometheus query construction and HTTP API access
//!
//! This module provides:
//! - PromQL templates for workload CPU/memory usage and requests
//! - An HTTP client for the `/api/v1/query` endpoint

mod client;
mod query;

pub use client::{PrometheusClient, Sample, Series};
pub use query::{validate_window, MetricQuery, WorkloadSelector, DEFAULT_RATE_WINDOW};

//! Threshold-based analysis of workload resource usage
//!
//! This module provides:
//! - The heuristic threshold constants
//! - The per-workload join of usage and request query results
//! - The rule set mapping joined usage to optimization suggestions

mod advisor;
mod snapshot;
mod thresholds;

pub use advisor::{analyze, evaluate};
pub use snapshot::{UsageSnapshot, BYTES_PER_MB};
pub use thresholds::Thresholds;

//! Core data models for the resource advisor

use serde::{Deserialize, Serialize};

/// Identity of a workload as reported by Prometheus labels
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkloadKey {
    pub namespace: String,
    pub pod: String,
}

impl std::fmt::Display for WorkloadKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.pod)
    }
}

/// Observed usage and configured requests for one workload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadUsage {
    pub key: WorkloadKey,
    pub cpu_usage_cores: f64,
    pub memory_usage_mb: f64,
    pub cpu_request_cores: Option<f64>,
    pub memory_request_mb: Option<f64>,
}

impl WorkloadUsage {
    /// CPU usage as a percentage of the configured request, if any
    pub fn cpu_utilization_percent(&self) -> Option<f64> {
        match self.cpu_request_cores {
            Some(request) if request > 0.0 => Some(self.cpu_usage_cores / request * 100.0),
            _ => None,
        }
    }

    /// Memory usage as a percentage of the configured request, if any
    pub fn memory_utilization_percent(&self) -> Option<f64> {
        match self.memory_request_mb {
            Some(request) if request > 0.0 => Some(self.memory_usage_mb / request * 100.0),
            _ => None,
        }
    }
}

/// Suggested adjustment for a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ReduceCpuRequest,
    ReduceMemoryRequest,
    ScaleReplicas,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Action::ReduceCpuRequest => "Reduce CPU requests",
            Action::ReduceMemoryRequest => "Reduce memory requests",
            Action::ScaleReplicas => "Consider scaling replicas",
        };
        f.write_str(label)
    }
}

/// Optimization suggestion for one workload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub namespace: String,
    pub pod: String,
    pub cpu_usage_cores: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_utilization_percent: Option<f64>,
    pub memory_usage_mb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_utilization_percent: Option<f64>,
    pub actions: Vec<Action>,
    pub reasons: Vec<String>,
}

//! Threshold rules mapping joined usage to optimization suggestions

use crate::models::{Action, Recommendation, WorkloadUsage};

use super::snapshot::UsageSnapshot;
use super::thresholds::Thresholds;

/// Apply the threshold rules to one workload
///
/// Pure function of the joined numbers: identical inputs always produce the
/// same suggestion. Returns `None` when no rule fires ("no change").
pub fn evaluate(usage: &WorkloadUsage, thresholds: &Thresholds) -> Option<Recommendation> {
    let mut actions = Vec::new();
    let mut reasons = Vec::new();

    if let Some(request) = usage.cpu_request_cores {
        if usage.cpu_usage_cores < thresholds.cpu_idle_cores {
            actions.push(Action::ReduceCpuRequest);
            reasons.push(format!(
                "Low CPU usage ({:.2} cores) vs request ({:.2} cores)",
                usage.cpu_usage_cores, request
            ));
        }
    }

    if let Some(request) = usage.memory_request_mb {
        if usage.memory_usage_mb < thresholds.memory_idle_mb {
            actions.push(Action::ReduceMemoryRequest);
            reasons.push(format!(
                "Low memory usage ({:.2} MB) vs request ({:.2} MB)",
                usage.memory_usage_mb, request
            ));
        }
    }

    let cpu_percent = usage.cpu_utilization_percent().unwrap_or(0.0);
    if cpu_percent > thresholds.cpu_saturation_percent
        || usage.memory_usage_mb > thresholds.memory_pressure_mb
    {
        actions.push(Action::ScaleReplicas);
        reasons.push(format!(
            "High resource usage: CPU {:.1}%, memory {:.2} MB",
            cpu_percent, usage.memory_usage_mb
        ));
    }

    if actions.is_empty() {
        return None;
    }

    Some(Recommendation {
        namespace: usage.key.namespace.clone(),
        pod: usage.key.pod.clone(),
        cpu_usage_cores: usage.cpu_usage_cores,
        cpu_utilization_percent: usage.cpu_utilization_percent(),
        memory_usage_mb: usage.memory_usage_mb,
        memory_utilization_percent: usage.memory_utilization_percent(),
        actions,
        reasons,
    })
}

/// Evaluate every workload in the snapshot
///
/// Recommendations come back in (namespace, pod) order, so repeated runs
/// against identical data render identical reports.
pub fn analyze(snapshot: &UsageSnapshot, thresholds: &Thresholds) -> Vec<Recommendation> {
    snapshot
        .workloads()
        .filter_map(|usage| evaluate(usage, thresholds))
        .collect()
}

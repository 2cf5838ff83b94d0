//! Per-workload join of the usage and request query results

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::models::{WorkloadKey, WorkloadUsage};
use crate::prometheus::Series;

/// Bytes per MB, the unit memory values are reported in
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Joined usage and requests for all workloads seen in one query round
///
/// CPU usage is the driving set: a workload enters the snapshot only if the
/// usage query returned a series for it. Memory usage defaults to zero and
/// requests stay absent when the matching queries had no series for the key.
#[derive(Debug, Default)]
pub struct UsageSnapshot {
    workloads: BTreeMap<WorkloadKey, WorkloadUsage>,
}

impl UsageSnapshot {
    /// Build the snapshot from the four instant-query results
    pub fn from_series(
        cpu_usage: &[Series],
        memory_usage: &[Series],
        cpu_requests: &[Series],
        memory_requests: &[Series],
    ) -> Self {
        let cpu = index_series(cpu_usage, 1.0);
        let memory = index_series(memory_usage, BYTES_PER_MB);
        let cpu_req = index_series(cpu_requests, 1.0);
        let mem_req = index_series(memory_requests, BYTES_PER_MB);

        let mut workloads = BTreeMap::new();
        for (key, cpu_usage_cores) in cpu {
            let usage = WorkloadUsage {
                cpu_usage_cores,
                memory_usage_mb: memory.get(&key).copied().unwrap_or(0.0),
                cpu_request_cores: cpu_req.get(&key).copied(),
                memory_request_mb: mem_req.get(&key).copied(),
                key: key.clone(),
            };
            workloads.insert(key, usage);
        }

        Self { workloads }
    }

    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }

    pub fn len(&self) -> usize {
        self.workloads.len()
    }

    /// Workloads in (namespace, pod) order
    pub fn workloads(&self) -> impl Iterator<Item = &WorkloadUsage> {
        self.workloads.values()
    }
}

/// Index series by workload key, dividing values by the given unit
///
/// Series missing identifying labels or carrying unparseable values are
/// skipped with a warning rather than failing the whole snapshot.
fn index_series(series: &[Series], divisor: f64) -> HashMap<WorkloadKey, f64> {
    let mut map = HashMap::new();
    for entry in series {
        let key = match (entry.metric.get("namespace"), entry.metric.get("pod")) {
            (Some(namespace), Some(pod)) => WorkloadKey {
                namespace: namespace.clone(),
                pod: pod.clone(),
            },
            _ => {
                warn!("Skipping series without pod/namespace labels");
                continue;
            }
        };

        match entry.value.parse() {
            Ok(value) => {
                map.insert(key, value / divisor);
            }
            Err(err) => {
                warn!(workload = %key, %err, "Skipping series with invalid sample");
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prometheus::Sample;

    fn series(namespace: &str, pod: &str, value: &str) -> Series {
        let mut metric = HashMap::new();
        metric.insert("namespace".to_string(), namespace.to_string());
        metric.insert("pod".to_string(), pod.to_string());
        Series {
            metric,
            value: Sample(1700000000.0, value.to_string()),
        }
    }

    #[test]
    fn test_join_across_queries() {
        let cpu = vec![series("default", "web-0", "0.05")];
        let memory = vec![series("default", "web-0", "104857600")]; // 100 MB
        let cpu_req = vec![series("default", "web-0", "0.5")];
        let mem_req = vec![series("default", "web-0", "268435456")]; // 256 MB

        let snapshot = UsageSnapshot::from_series(&cpu, &memory, &cpu_req, &mem_req);
        assert_eq!(snapshot.len(), 1);

        let usage = snapshot.workloads().next().unwrap();
        assert_eq!(usage.key.to_string(), "default/web-0");
        assert_eq!(usage.cpu_usage_cores, 0.05);
        assert_eq!(usage.memory_usage_mb, 100.0);
        assert_eq!(usage.cpu_request_cores, Some(0.5));
        assert_eq!(usage.memory_request_mb, Some(256.0));
    }

    #[test]
    fn test_missing_requests_stay_absent() {
        let cpu = vec![series("default", "web-0", "0.2")];

        let snapshot = UsageSnapshot::from_series(&cpu, &[], &[], &[]);
        let usage = snapshot.workloads().next().unwrap();

        assert_eq!(usage.memory_usage_mb, 0.0);
        assert!(usage.cpu_request_cores.is_none());
        assert!(usage.memory_request_mb.is_none());
        assert!(usage.cpu_utilization_percent().is_none());
    }

    #[test]
    fn test_series_without_labels_skipped() {
        let mut unlabeled = series("default", "web-0", "0.2");
        unlabeled.metric.remove("pod");

        let snapshot = UsageSnapshot::from_series(&[unlabeled], &[], &[], &[]);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_invalid_sample_skipped() {
        let cpu = vec![
            series("default", "web-0", "bogus"),
            series("default", "web-1", "0.2"),
        ];

        let snapshot = UsageSnapshot::from_series(&cpu, &[], &[], &[]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.workloads().next().unwrap().key.pod, "web-1");
    }

    #[test]
    fn test_workloads_iterate_in_key_order() {
        let cpu = vec![
            series("zeta", "pod-b", "0.2"),
            series("alpha", "pod-z", "0.2"),
            series("alpha", "pod-a", "0.2"),
        ];

        let snapshot = UsageSnapshot::from_series(&cpu, &[], &[], &[]);
        let keys: Vec<String> = snapshot.workloads().map(|u| u.key.to_string()).collect();
        assert_eq!(keys, vec!["alpha/pod-a", "alpha/pod-z", "zeta/pod-b"]);
    }
}

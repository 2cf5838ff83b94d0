//! PromQL query construction
//!
//! Renders the fixed set of queries the advisor issues. Rendering is a pure
//! function of the query kind, the workload selector and the rate window, so
//! identical inputs always produce identical query strings.

use crate::error::{Error, Result};

/// Default window for `rate()` queries
pub const DEFAULT_RATE_WINDOW: &str = "5m";

/// Optional namespace/pod scoping for a query
///
/// An empty selector queries the whole cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadSelector {
    pub namespace: Option<String>,
    pub pod: Option<String>,
}

impl WorkloadSelector {
    pub fn new(namespace: Option<String>, pod: Option<String>) -> Self {
        Self { namespace, pod }
    }

    /// Whether this selector names a specific workload
    pub fn is_scoped(&self) -> bool {
        self.namespace.is_some() || self.pod.is_some()
    }

    /// Human-readable name of the selected workload, for error messages
    pub fn describe(&self) -> String {
        match (&self.namespace, &self.pod) {
            (Some(ns), Some(pod)) => format!("{}/{}", ns, pod),
            (Some(ns), None) => format!("namespace {}", ns),
            (None, Some(pod)) => pod.clone(),
            (None, None) => "all workloads".to_string(),
        }
    }

    /// Label matchers contributed by this selector
    fn matchers(&self) -> Vec<String> {
        let mut matchers = Vec::new();
        if let Some(ns) = &self.namespace {
            matchers.push(format!("namespace=\"{}\"", ns));
        }
        if let Some(pod) = &self.pod {
            matchers.push(format!("pod=\"{}\"", pod));
        }
        matchers
    }
}

/// The metric families the advisor inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricQuery {
    /// Per-pod CPU usage rate in cores
    CpuUsage,
    /// Per-pod memory usage in bytes
    MemoryUsage,
    /// Per-pod configured CPU requests in cores
    CpuRequests,
    /// Per-pod configured memory requests in bytes
    MemoryRequests,
}

impl MetricQuery {
    /// Render the PromQL for this query
    ///
    /// The window only applies to the CPU usage query, the single `rate()`
    /// template in the set.
    pub fn promql(&self, selector: &WorkloadSelector, window: &str) -> String {
        let matchers = |base: &str| -> String {
            let mut parts = vec![base.to_string()];
            parts.extend(selector.matchers());
            parts.join(",")
        };

        match self {
            MetricQuery::CpuUsage => format!(
                "sum(rate(container_cpu_usage_seconds_total{{{}}}[{}])) by (pod, namespace)",
                matchers("container!=\"\""),
                window
            ),
            MetricQuery::MemoryUsage => format!(
                "sum(container_memory_usage_bytes{{{}}}) by (pod, namespace)",
                matchers("container!=\"\"")
            ),
            MetricQuery::CpuRequests => format!(
                "sum(kube_pod_container_resource_requests{{{}}}) by (pod, namespace)",
                matchers("resource=\"cpu\"")
            ),
            MetricQuery::MemoryRequests => format!(
                "sum(kube_pod_container_resource_requests{{{}}}) by (pod, namespace)",
                matchers("resource=\"memory\"")
            ),
        }
    }
}

/// Validate a `rate()` window string such as `5m` or `1h`
pub fn validate_window(window: &str) -> Result<()> {
    let valid = window.len() >= 2
        && window.ends_with(['s', 'm', 'h', 'd'])
        && window[..window.len() - 1].bytes().all(|b| b.is_ascii_digit())
        && window[..window.len() - 1].parse::<u64>().map(|n| n > 0).unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidWindow {
            window: window.to_string(),
        })
    }
}

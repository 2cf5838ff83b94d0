//! Heuristic thresholds for optimization suggestions

/// CPU usage below this many cores marks a configured request as oversized
const DEFAULT_CPU_IDLE_CORES: f64 = 0.1;

/// Memory usage below this many MB marks a configured request as oversized
const DEFAULT_MEMORY_IDLE_MB: f64 = 50.0;

/// CPU utilization above this share of its request suggests scaling out
const DEFAULT_CPU_SATURATION_PERCENT: f64 = 80.0;

/// Absolute memory usage above this many MB suggests scaling out
const DEFAULT_MEMORY_PRESSURE_MB: f64 = 500.0;

/// Threshold set applied to every workload
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Below this CPU usage (cores), a CPU request is over-provisioned
    pub cpu_idle_cores: f64,
    /// Below this memory usage (MB), a memory request is over-provisioned
    pub memory_idle_mb: f64,
    /// Above this CPU utilization (% of request), a workload is saturated
    pub cpu_saturation_percent: f64,
    /// Above this memory usage (MB), a workload is under pressure
    pub memory_pressure_mb: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu_idle_cores: DEFAULT_CPU_IDLE_CORES,
            memory_idle_mb: DEFAULT_MEMORY_IDLE_MB,
            cpu_saturation_percent: DEFAULT_CPU_SATURATION_PERCENT,
            memory_pressure_mb: DEFAULT_MEMORY_PRESSURE_MB,
        }
    }
}

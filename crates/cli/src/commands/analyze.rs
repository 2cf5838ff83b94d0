//! Resource analysis command

use advisor_lib::{
    analyze, prometheus::validate_window, Error, MetricQuery, PrometheusClient, Recommendation,
    Thresholds, UsageSnapshot, WorkloadSelector,
};
use anyhow::{Context, Result};
use tabled::Tabled;
use tracing::info;

use crate::output::{
    color_utilization, format_cores, format_mb, print_success, print_warning, write_json_file,
    OutputFormat,
};

/// Row for the recommendations table
#[derive(Tabled)]
struct RecommendationRow {
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Pod")]
    pod: String,
    #[tabled(rename = "CPU Usage")]
    cpu_usage: String,
    #[tabled(rename = "CPU %")]
    cpu_percent: String,
    #[tabled(rename = "Mem Usage")]
    memory_usage: String,
    #[tabled(rename = "Mem %")]
    memory_percent: String,
    #[tabled(rename = "Suggested Optimization")]
    suggestion: String,
}

/// Run the analysis pipeline and render the report
pub async fn run(
    client: &PrometheusClient,
    namespace: Option<String>,
    pod: Option<String>,
    window: &str,
    output: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    validate_window(window)?;
    let selector = WorkloadSelector::new(namespace, pod);

    info!(url = %client.base_url(), "Checking Prometheus availability");
    client
        .check_availability()
        .await
        .context("Prometheus is not reachable")?;

    info!("Fetching data from Prometheus");
    let cpu_usage = client
        .instant_query(&MetricQuery::CpuUsage.promql(&selector, window))
        .await
        .with_context(|| format!("Failed to fetch CPU usage for {}", selector.describe()))?;
    let memory_usage = client
        .instant_query(&MetricQuery::MemoryUsage.promql(&selector, window))
        .await
        .with_context(|| format!("Failed to fetch memory usage for {}", selector.describe()))?;
    let cpu_requests = client
        .instant_query(&MetricQuery::CpuRequests.promql(&selector, window))
        .await
        .with_context(|| format!("Failed to fetch CPU requests for {}", selector.describe()))?;
    let memory_requests = client
        .instant_query(&MetricQuery::MemoryRequests.promql(&selector, window))
        .await
        .with_context(|| format!("Failed to fetch memory requests for {}", selector.describe()))?;

    // A specifically requested workload with no usage data is an error; an
    // unscoped sweep over an idle cluster is just an empty report.
    if selector.is_scoped() && cpu_usage.is_empty() {
        return Err(Error::NoData {
            workload: selector.describe(),
        }
        .into());
    }

    info!("Analyzing resource usage");
    let snapshot =
        UsageSnapshot::from_series(&cpu_usage, &memory_usage, &cpu_requests, &memory_requests);
    let recommendations = analyze(&snapshot, &Thresholds::default());

    render(&recommendations, snapshot.len(), format)?;

    if let Some(path) = output {
        write_json_file(&recommendations, &path)?;
        info!(path = %path, "Recommendations exported");
    }

    Ok(())
}

fn render(recommendations: &[Recommendation], workload_count: usize, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(recommendations)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if workload_count == 0 {
                print_warning("No workload metrics found");
                return Ok(());
            }
            if recommendations.is_empty() {
                print_success("No optimizations needed. All pods are well-optimized.");
                return Ok(());
            }

            let rows: Vec<RecommendationRow> = recommendations.iter().map(row_for).collect();
            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} recommendations", recommendations.len());
        }
    }

    Ok(())
}

fn row_for(rec: &Recommendation) -> RecommendationRow {
    RecommendationRow {
        namespace: rec.namespace.clone(),
        pod: rec.pod.clone(),
        cpu_usage: format_cores(rec.cpu_usage_cores),
        cpu_percent: rec
            .cpu_utilization_percent
            .map(color_utilization)
            .unwrap_or_else(|| "-".to_string()),
        memory_usage: format_mb(rec.memory_usage_mb),
        memory_percent: rec
            .memory_utilization_percent
            .map(color_utilization)
            .unwrap_or_else(|| "-".to_string()),
        suggestion: rec
            .actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

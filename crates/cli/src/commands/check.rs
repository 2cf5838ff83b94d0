//! Availability probe command

use advisor_lib::PrometheusClient;
use anyhow::{Context, Result};

use crate::output::print_success;

/// Probe the Prometheus endpoint and report reachability
pub async fn run(client: &PrometheusClient) -> Result<()> {
    client
        .check_availability()
        .await
        .context("Prometheus is not reachable")?;

    print_success(&format!(
        "Prometheus is accessible at {}",
        client.base_url()
    ));

    Ok(())
}

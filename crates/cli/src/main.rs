//! Kubernetes Resource Advisor CLI
//!
//! A command-line tool that queries a Prometheus-compatible endpoint for
//! workload CPU/memory utilization and suggests resource optimizations.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{analyze, check};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Kubernetes Resource Advisor CLI
#[derive(Parser)]
#[command(name = "kra")]
#[command(author, version, about = "CLI for Kubernetes Resource Advisor", long_about = None)]
pub struct Cli {
    /// Prometheus API endpoint URL
    #[arg(long)]
    pub prometheus_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze workload resource usage and suggest optimizations
    Analyze {
        /// Filter by namespace
        #[arg(long, short)]
        namespace: Option<String>,

        /// Filter by pod name
        #[arg(long, short)]
        pod: Option<String>,

        /// Rate window for the CPU usage query (e.g. 5m, 1h)
        #[arg(long, default_value = advisor_lib::prometheus::DEFAULT_RATE_WINDOW)]
        window: String,

        /// Export recommendations to a JSON file
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Check that the Prometheus endpoint is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let client = advisor_lib::PrometheusClient::new(&cli.prometheus_url)?;

    match cli.command {
        Commands::Analyze {
            namespace,
            pod,
            window,
            output,
        } => {
            analyze::run(&client, namespace, pod, &window, output, cli.format).await?;
        }
        Commands::Check => {
            check::run(&client).await?;
        }
    }

    Ok(())
}

/// Initialize tracing with an env filter, writing to stderr
///
/// Stdout stays reserved for the report so reruns against unchanged data
/// produce identical output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

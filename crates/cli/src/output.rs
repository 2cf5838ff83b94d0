//! Output formatting utilities

use advisor_lib::Recommendation;
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format a CPU value in cores
pub fn format_cores(cores: f64) -> String {
    format!("{:.2} cores", cores)
}

/// Format a memory value in MB
pub fn format_mb(mb: f64) -> String {
    format!("{:.2} MB", mb)
}

/// Format a utilization percentage
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Color a utilization percentage by how close it sits to saturation
pub fn color_utilization(percent: f64) -> String {
    let formatted = format_percent(percent);
    if percent > 80.0 {
        formatted.red().to_string()
    } else if percent > 50.0 {
        formatted.yellow().to_string()
    } else {
        formatted.green().to_string()
    }
}

/// Write the recommendation list to a JSON file
pub fn write_json_file(recommendations: &[Recommendation], path: &str) -> Result<()> {
    let content = serde_json::to_string_pretty(recommendations)
        .context("Failed to serialize recommendations")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write recommendations to {}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_lib::Action;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_cores(0.05), "0.05 cores");
        assert_eq!(format_mb(123.456), "123.46 MB");
        assert_eq!(format_percent(87.65), "87.7%");
    }

    #[test]
    fn test_write_json_file() {
        let recommendations = vec![Recommendation {
            namespace: "default".to_string(),
            pod: "web-0".to_string(),
            cpu_usage_cores: 0.05,
            cpu_utilization_percent: Some(10.0),
            memory_usage_mb: 42.0,
            memory_utilization_percent: None,
            actions: vec![Action::ReduceCpuRequest],
            reasons: vec!["Low CPU usage (0.05 cores) vs request (0.50 cores)".to_string()],
        }];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suggestions.json");
        write_json_file(&recommendations, path.to_str().unwrap()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Recommendation> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].pod, "web-0");
        assert_eq!(parsed[0].actions, vec![Action::ReduceCpuRequest]);
    }

    #[test]
    fn test_write_json_file_bad_path() {
        let err = write_json_file(&[], "/nonexistent-dir/suggestions.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/suggestions.json"));
    }
}

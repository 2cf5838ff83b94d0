//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kra-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Kubernetes Resource Advisor"),
        "Should show app name"
    );
    assert!(stdout.contains("analyze"), "Should show analyze command");
    assert!(stdout.contains("check"), "Should show check command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kra-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("kra"), "Should show binary name");
}

/// Test analyze subcommand help
#[test]
fn test_analyze_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kra-cli", "--", "analyze", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Analyze help should succeed");
    assert!(
        stdout.contains("--namespace"),
        "Should show namespace option"
    );
    assert!(stdout.contains("--pod"), "Should show pod option");
    assert!(stdout.contains("--window"), "Should show window option");
    assert!(stdout.contains("--output"), "Should show output option");
}

/// Test format option
#[test]
fn test_format_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kra-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test prometheus-url option is required
#[test]
fn test_prometheus_url_required() {
    let output = Command::new("cargo")
        .args(["run", "-p", "kra-cli", "--", "check"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing URL should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--prometheus-url"),
        "Should name the missing option"
    );
}

/// Test that a malformed rate window fails before any request is made
#[test]
fn test_invalid_window() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "kra-cli",
            "--",
            "--prometheus-url",
            "http://localhost:9090",
            "analyze",
            "--window",
            "bogus",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid window should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid rate window"),
        "Should explain the window format"
    );
}

/// Test that an unparseable endpoint URL fails
#[test]
fn test_invalid_url() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "kra-cli",
            "--",
            "--prometheus-url",
            "not a url",
            "check",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid URL should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid Prometheus URL"),
        "Should show URL error"
    );
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "kra-cli",
            "--",
            "--prometheus-url",
            "http://localhost:9090",
            "invalid-command",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}

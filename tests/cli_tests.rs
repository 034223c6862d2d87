//! Integration tests for the two binaries.
//!
//! These tests run the compiled executables and check their output and exit
//! codes.

use std::fs;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

/// Helper to get the budget binary path
fn budget_binary() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_error-budget"))
}

/// Helper to get the audit binary path
fn audit_binary() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_config-audit"))
}

fn run(binary: std::path::PathBuf, args: &[&str]) -> (Output, String, String) {
    let output = Command::new(binary)
        .args(args)
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output, stdout, stderr)
}

#[test]
fn test_budget_default_report() {
    let (output, stdout, stderr) = run(budget_binary(), &["--no-config"]);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stdout.contains("💰 Error Budget Calculator"));
    assert!(stdout.contains("Monthly error budget: 43.2 minutes"));
    assert!(stdout.contains("Severity: CRITICAL - Page immediately"));
    assert!(stdout.contains("Budget exhausted in: 2.1 days (50 hours)"));
    assert!(stdout.contains("Incidents allowed this month: 3"));
    assert!(stdout.contains("Status: NORMAL OPERATIONS"));
}

#[test]
fn test_budget_cli_overrides() {
    let (output, stdout, _) = run(
        budget_binary(),
        &[
            "--no-config",
            "--slo-target",
            "99.99",
            "--service",
            "Checkout API",
        ],
    );

    assert!(output.status.success());
    assert!(stdout.contains("📊 Checkout API SLO: 99.99% availability"));
    assert!(stdout.contains("Monthly error budget: 4.3 minutes"));
    assert!(stdout.contains("Status: EMERGENCY MODE"));
}

#[test]
fn test_budget_check_config_rejects_zero_window() {
    let (output, stdout, stderr) = run(
        budget_binary(),
        &["--no-config", "--window-days", "0", "--check-config"],
    );

    assert!(!output.status.success());
    assert!(
        stderr.contains("window_days") || stdout.contains("window_days"),
        "Expected window_days error, got stdout: '{}', stderr: '{}'",
        stdout,
        stderr
    );
}

#[test]
fn test_budget_reads_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(file, "budget:\n  service_name: Ledger\n  incident_minutes: 35").unwrap();

    let path = file.path().to_string_lossy().to_string();
    let (output, stdout, _) = run(budget_binary(), &["--config", &path]);

    assert!(output.status.success());
    assert!(stdout.contains("📊 Ledger SLO: 99.9% availability"));
    assert!(stdout.contains("Incident duration: 35 minutes"));
    assert!(stdout.contains("Status: FEATURE FREEZE"));
}

#[test]
fn test_show_config_json() {
    let (output, stdout, _) = run(
        budget_binary(),
        &["--no-config", "--show-config", "--config-format", "json"],
    );

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON config");
    assert_eq!(parsed["budget"]["window_days"], 30);
}

#[test]
fn test_audit_reports_findings_but_succeeds() {
    let dir = TempDir::new().unwrap();
    let slo_dir = dir.path().join("datadog").join("slos");
    fs::create_dir_all(&slo_dir).unwrap();
    fs::write(
        slo_dir.join("slo-definitions.yaml"),
        "slos:\n  - name: search\n    objective: 90\n",
    )
    .unwrap();
    fs::write(dir.path().join("broken.json"), "{\"a\": }").unwrap();

    let root = dir.path().to_string_lossy().to_string();
    let (output, stdout, stderr) = run(
        audit_binary(),
        &["--no-config", "--no-color", "--root", &root],
    );

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stdout.contains("  ✓ datadog/slos/slo-definitions.yaml"));
    assert!(stdout.contains("  ✗ broken.json: Invalid JSON: "));
    assert!(stdout.contains("⚠️  SLO search: 90% seems too low"));
    assert!(stdout.contains("✅ Configuration validation complete!"));
}

#[test]
fn test_audit_root_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("service.yml"), "name: svc\n").unwrap();

    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        "audit:\n  root: {}\n  color: false",
        dir.path().display()
    )
    .unwrap();

    // No extension: parsed as YAML
    let config_path = config.path().to_string_lossy().to_string();
    let (output, stdout, _) = run(audit_binary(), &["--config", &config_path]);

    assert!(output.status.success());
    assert!(stdout.contains("  ✓ service.yml\n"));
}

#[test]
fn test_audit_invalid_config_file_fails() {
    let mut config = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(config, "{{ not json").unwrap();

    let config_path = config.path().to_string_lossy().to_string();
    let (output, _, stderr) = run(audit_binary(), &["--config", &config_path]);

    assert!(!output.status.success());
    assert!(stderr.contains("Failed to load configuration"), "stderr: {}", stderr);
}

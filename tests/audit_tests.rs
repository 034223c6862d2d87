//! Integration tests for the configuration auditor.
//!
//! Each test lays out a small project tree in a temporary directory and runs
//! the full audit against it.

use std::fs;
use std::path::Path;

use slo_toolkit::audit::{
    check_burn_rates, check_slo_thresholds, run_audit, AuditError, FileFormat,
    ALERT_DEFINITIONS_PATH, SLO_DEFINITIONS_PATH,
};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write fixture");
}

fn render_plain(root: &Path) -> String {
    let report = run_audit(root);
    let mut buf = Vec::new();
    report.render(&mut buf, false).expect("render report");
    String::from_utf8(buf).expect("utf8 output")
}

#[test]
fn test_one_pass_and_one_fail_per_format() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "good.yaml", "service: payments\nreplicas: 3\n");
    write(dir.path(), "nested/bad.yml", "service: [payments\n");
    write(dir.path(), "dashboards/good.json", r#"{"title": "SLOs", "widgets": []}"#);
    write(dir.path(), "dashboards/bad.json", r#"{"title": "SLOs",}"#);

    let report = run_audit(dir.path());

    for format in FileFormat::ALL {
        let outcomes = report.syntax_outcomes(format);
        assert_eq!(outcomes.len(), 2, "{} outcomes", format);
        assert_eq!(outcomes.iter().filter(|o| o.ok).count(), 1);

        let failure = outcomes.iter().find(|o| !o.ok).unwrap();
        let prefix = format!("Invalid {}: ", format);
        assert!(failure.message.starts_with(&prefix), "{}", failure.message);
        assert!(failure.message.len() > prefix.len());
    }
    assert_eq!(report.syntax_failures(), 2);
}

#[test]
fn test_rendered_lines_use_relative_paths() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "k8s/deploy.yaml", "kind: Deployment\n");
    write(dir.path(), "k8s/broken.json", "{");

    let text = render_plain(dir.path());
    assert!(text.contains("  ✓ k8s/deploy.yaml\n"));
    assert!(text.contains("  ✗ k8s/broken.json: Invalid JSON: "));
    assert!(!text.contains(&dir.path().display().to_string()));
}

#[test]
fn test_every_matching_file_reported_once() {
    let dir = TempDir::new().unwrap();
    let names = ["a.yaml", "b.yml", "c/d.yaml", "c/e/f.json", "g.json"];
    for name in names {
        let content = if name.ends_with(".json") { "[]" } else { "x: 1\n" };
        write(dir.path(), name, content);
    }
    write(dir.path(), "README.md", "# not config");

    let text = render_plain(dir.path());
    for name in names {
        let line = format!("  ✓ {}\n", name);
        assert_eq!(text.matches(&line).count(), 1, "line for {}", name);
    }
    assert!(!text.contains("README.md"));
}

#[test]
fn test_slo_definitions_checked() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        SLO_DEFINITIONS_PATH,
        "slos:\n  - name: checkout-availability\n    objective: 94\n  - name: checkout-latency\n    objective: 96\n  - name: payments-availability\n    objective: 99.999\n",
    );

    let issues = check_slo_thresholds(&dir.path().join(SLO_DEFINITIONS_PATH)).unwrap();
    assert_eq!(issues.len(), 2);
    assert!(issues[0].message.contains("checkout-availability: 94% seems too low"));
    assert!(issues[1]
        .message
        .contains("payments-availability: 99.999% might be unrealistic"));

    let text = render_plain(dir.path());
    assert!(text.contains("⚠️  SLO checkout-availability: 94% seems too low"));
    assert!(!text.contains("All SLO targets look reasonable"));
}

#[test]
fn test_burn_rate_definitions_checked() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        ALERT_DEFINITIONS_PATH,
        "monitors:\n  - name: payments burn\n    multi_burn_rate_configurations:\n      - burn_rate_threshold: 15\n        long_window: 1h\n      - burn_rate_threshold: 25\n        long_window: 5m\n",
    );

    let issues = check_burn_rates(&dir.path().join(ALERT_DEFINITIONS_PATH)).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Very high burn rate 25x for 5m window");
}

#[test]
fn test_clean_definitions_print_confirmation() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        SLO_DEFINITIONS_PATH,
        "slos:\n  - name: api\n    objective: 99.9\n",
    );
    write(
        dir.path(),
        ALERT_DEFINITIONS_PATH,
        "monitors:\n  - name: api burn\n    multi_burn_rate_configurations:\n      - burn_rate_threshold: 14.4\n        long_window: 1h\n",
    );

    let text = render_plain(dir.path());
    assert!(text.contains("  ✓ All SLO targets look reasonable"));
    assert!(text.contains("  ✓ Burn rates follow Google SRE guidelines"));
}

#[test]
fn test_missing_well_known_files_skip_checks() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app.yaml", "name: app\n");

    let report = run_audit(dir.path());
    assert!(report.slo_check.is_none());
    assert!(report.burn_rate_check.is_none());

    let text = render_plain(dir.path());
    assert!(text.contains("Checking SLO Best Practices..."));
    assert!(!text.contains("All SLO targets look reasonable"));
    assert!(!text.contains("Burn rates follow Google SRE guidelines"));
    assert!(!text.contains("⚠️"));
    assert!(text.ends_with("✅ Configuration validation complete!\n"));
}

#[test]
fn test_broken_definitions_do_not_stop_the_audit() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), SLO_DEFINITIONS_PATH, "slos:\n  - objective: 80\n");
    write(dir.path(), ALERT_DEFINITIONS_PATH, "monitors: [\n");

    let report = run_audit(dir.path());
    assert!(matches!(
        report.slo_check,
        Some(Err(AuditError::MissingKey { .. }))
    ));
    assert!(matches!(
        report.burn_rate_check,
        Some(Err(AuditError::Parse { .. }))
    ));
    // the broken alert file is still listed as a syntax failure
    assert_eq!(report.syntax_failures(), 1);

    let text = render_plain(dir.path());
    assert_eq!(text.matches("Could not complete check").count(), 2);
    assert!(text.contains("✅ Configuration validation complete!"));
}

#[test]
fn test_missing_top_level_key_reports_no_issues() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), SLO_DEFINITIONS_PATH, "version: 2\n");

    let report = run_audit(dir.path());
    match report.slo_check {
        Some(Ok(issues)) => assert!(issues.is_empty()),
        other => panic!("unexpected SLO check outcome: {:?}", other),
    }
}

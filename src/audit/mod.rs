//! Configuration auditor.
//!
//! Walks a project tree, validates the syntax of every YAML/JSON file, and
//! applies threshold heuristics to the well-known SLO and alert definition
//! files. Every failure is recorded in the [`AuditReport`]; nothing here
//! aborts a scan.

pub mod discovery;
pub mod syntax;
pub mod thresholds;

pub use discovery::discover_files;
pub use syntax::{check_syntax, parse_structured_file, FileFormat, SyntaxOutcome};
pub use thresholds::{check_burn_rates, check_slo_thresholds};

use colored::{Color, Colorize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// SLO definitions, relative to the scan root.
pub const SLO_DEFINITIONS_PATH: &str = "datadog/slos/slo-definitions.yaml";
/// Alert monitor definitions, relative to the scan root.
pub const ALERT_DEFINITIONS_PATH: &str = "datadog/monitors/alert-definitions.yaml";

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid YAML in {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("{}: {} has no '{}'", .path.display(), .context, .key)]
    MissingKey {
        path: PathBuf,
        context: String,
        key: &'static str,
    },

    #[error("{}: {}", .path.display(), .reason)]
    Malformed { path: PathBuf, reason: String },

    #[error("invalid file pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

/// One finding from a threshold check.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub file: PathBuf,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    pub fn warning(file: &Path, message: impl Into<String>) -> Self {
        Self {
            file: file.to_path_buf(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Outcome of one semantic check. `None` in the report means the file was absent.
pub type CheckOutcome = Result<Vec<Issue>, AuditError>;

#[derive(Debug)]
pub struct AuditReport {
    pub root: PathBuf,
    pub yaml: Vec<SyntaxOutcome>,
    pub json: Vec<SyntaxOutcome>,
    pub slo_check: Option<CheckOutcome>,
    pub burn_rate_check: Option<CheckOutcome>,
}

impl AuditReport {
    pub fn syntax_outcomes(&self, format: FileFormat) -> &[SyntaxOutcome] {
        match format {
            FileFormat::Yaml => &self.yaml,
            FileFormat::Json => &self.json,
        }
    }

    /// Number of files that failed syntax validation.
    pub fn syntax_failures(&self) -> usize {
        self.yaml.iter().chain(&self.json).filter(|o| !o.ok).count()
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    pub fn render<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        let paint = |text: &str, c: Color| -> String {
            if color {
                text.color(c).to_string()
            } else {
                text.to_string()
            }
        };

        writeln!(out, "🔍 Observability Configuration Validator")?;
        writeln!(out, "{}", "=".repeat(50))?;

        for format in FileFormat::ALL {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                paint(&format!("Validating {} files...", format), Color::Blue)
            )?;
            for outcome in self.syntax_outcomes(format) {
                let shown = self.relative(&outcome.path).display();
                if outcome.ok {
                    writeln!(out, "  {} {}", paint("✓", Color::Green), shown)?;
                } else {
                    writeln!(
                        out,
                        "  {} {}: {}",
                        paint("✗", Color::Red),
                        shown,
                        outcome.message
                    )?;
                }
            }
        }

        let checks = [
            (
                "Checking SLO Best Practices...",
                &self.slo_check,
                "✓ All SLO targets look reasonable",
            ),
            (
                "Checking Burn Rate Configurations...",
                &self.burn_rate_check,
                "✓ Burn rates follow Google SRE guidelines",
            ),
        ];

        for (title, outcome, all_clear) in checks {
            writeln!(out)?;
            writeln!(out, "{}", paint(title, Color::Blue))?;
            match outcome {
                None => {}
                Some(Ok(issues)) if issues.is_empty() => {
                    writeln!(out, "  {}", paint(all_clear, Color::Green))?;
                }
                Some(Ok(issues)) => {
                    for issue in issues {
                        let line = format!("⚠️  {}", issue.message);
                        writeln!(out, "  {}", paint(&line, Color::Yellow))?;
                    }
                }
                Some(Err(e)) => {
                    let line = format!("⚠️  Could not complete check: {}", e);
                    writeln!(out, "  {}", paint(&line, Color::Red))?;
                }
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            paint("✅ Configuration validation complete!", Color::Green)
        )?;
        Ok(())
    }
}

fn validate_all(root: &Path, format: FileFormat) -> Vec<SyntaxOutcome> {
    match discover_files(root, format) {
        Ok(files) => files
            .iter()
            .map(|path| parse_structured_file(path, format))
            .collect(),
        Err(e) => {
            warn!("Skipping {} validation: {}", format, e);
            Vec::new()
        }
    }
}

/// Runs a semantic check only when its well-known file exists.
fn run_check(root: &Path, relative: &str, check: fn(&Path) -> CheckOutcome) -> Option<CheckOutcome> {
    let path = root.join(relative);
    if !path.exists() {
        debug!("{} not present, skipping check", path.display());
        return None;
    }

    let outcome = check(&path);
    if let Err(e) = &outcome {
        warn!("Check on {} did not complete: {}", path.display(), e);
    }
    Some(outcome)
}

/// Runs the full audit below `root`.
pub fn run_audit(root: &Path) -> AuditReport {
    AuditReport {
        root: root.to_path_buf(),
        yaml: validate_all(root, FileFormat::Yaml),
        json: validate_all(root, FileFormat::Json),
        slo_check: run_check(root, SLO_DEFINITIONS_PATH, check_slo_thresholds),
        burn_rate_check: run_check(root, ALERT_DEFINITIONS_PATH, check_burn_rates),
    }
}

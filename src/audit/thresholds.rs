//! Threshold heuristics for SLO and alert-monitor definition files.
//!
//! Both checks are lenient about what is absent (an empty file or a missing
//! top-level key yields no issues) and strict about what is present but of
//! the wrong shape, which aborts the check with [`AuditError::Malformed`].

use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{AuditError, Issue};

/// Objectives below this percentage are flagged as too low.
pub const MIN_REASONABLE_OBJECTIVE: f64 = 95.0;
/// Objectives above this percentage are flagged as unrealistic.
pub const MAX_REALISTIC_OBJECTIVE: f64 = 99.99;
/// Burn-rate alert thresholds above this are flagged.
pub const MAX_BURN_RATE_THRESHOLD: f64 = 20.0;

/// A numeric field together with its source spelling ("94", "99.0").
#[derive(Debug, Clone, PartialEq)]
struct NumericField {
    value: f64,
    text: String,
}

impl NumericField {
    fn zero() -> Self {
        Self {
            value: 0.0,
            text: "0".to_string(),
        }
    }
}

fn load_document(path: &Path) -> Result<Value, AuditError> {
    let content = fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_yaml::from_str(&content).map_err(|source| AuditError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn malformed(path: &Path, reason: impl Into<String>) -> AuditError {
    AuditError::Malformed {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Returns the sequence under `key`, or an empty slice when there is none.
fn top_level_sequence<'a>(doc: &'a Value, key: &str, path: &Path) -> Result<&'a [Value], AuditError> {
    match doc {
        Value::Null => Ok(&[]),
        Value::Mapping(map) => match map.get(key) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Sequence(items)) => Ok(items.as_slice()),
            Some(_) => Err(malformed(path, format!("top-level '{}' is not a list", key))),
        },
        _ => Err(malformed(path, "document root is not a mapping")),
    }
}

/// Reads an optional numeric field, falling back to zero when absent.
fn numeric_or_zero(
    entry: &Value,
    key: &str,
    path: &Path,
    context: &str,
) -> Result<NumericField, AuditError> {
    match entry.get(key) {
        None => Ok(NumericField::zero()),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(value) => Ok(NumericField {
                value,
                text: n.to_string(),
            }),
            None => Err(malformed(path, format!("{}: '{}' is out of range", context, key))),
        },
        Some(_) => Err(malformed(path, format!("{}: '{}' is not a number", context, key))),
    }
}

/// Renders a scalar the way it reads in the source file.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Flags SLO objectives that look too low or unrealistically high.
///
/// A missing `objective` counts as 0 and is therefore always flagged. The
/// `name` is only required for flagged entries; if it is missing there, the
/// whole check fails with [`AuditError::MissingKey`].
pub fn check_slo_thresholds(path: &Path) -> Result<Vec<Issue>, AuditError> {
    let doc = load_document(path)?;
    let slos = top_level_sequence(&doc, "slos", path)?;

    let mut issues = Vec::new();
    for (index, slo) in slos.iter().enumerate() {
        let context = format!("slos[{}]", index);
        if !slo.is_mapping() {
            return Err(malformed(path, format!("{} is not a mapping", context)));
        }

        let objective = numeric_or_zero(slo, "objective", path, &context)?;
        let verdict = if objective.value < MIN_REASONABLE_OBJECTIVE {
            "seems too low"
        } else if objective.value > MAX_REALISTIC_OBJECTIVE {
            "might be unrealistic"
        } else {
            continue;
        };

        let name = slo.get("name").ok_or_else(|| AuditError::MissingKey {
            path: path.to_path_buf(),
            context: context.clone(),
            key: "name",
        })?;

        issues.push(Issue::warning(
            path,
            format!("SLO {}: {}% {}", scalar_text(name), objective.text, verdict),
        ));
    }

    debug!("SLO check on {}: {} issue(s)", path.display(), issues.len());
    Ok(issues)
}

/// Flags multi-burn-rate alert configurations with very high thresholds.
///
/// Monitors without `multi_burn_rate_configurations` are ignored. Within an
/// entry, `burn_rate_threshold` defaults to 0 and `long_window` to "unknown".
pub fn check_burn_rates(path: &Path) -> Result<Vec<Issue>, AuditError> {
    let doc = load_document(path)?;
    let monitors = top_level_sequence(&doc, "monitors", path)?;

    let mut issues = Vec::new();
    for (index, monitor) in monitors.iter().enumerate() {
        let Some(configurations) = monitor.get("multi_burn_rate_configurations") else {
            continue;
        };
        let configurations = match configurations {
            Value::Sequence(items) => items.as_slice(),
            Value::Null => continue,
            _ => {
                return Err(malformed(
                    path,
                    format!("monitors[{}].multi_burn_rate_configurations is not a list", index),
                ))
            }
        };

        for (position, config) in configurations.iter().enumerate() {
            let context = format!(
                "monitors[{}].multi_burn_rate_configurations[{}]",
                index, position
            );
            if !config.is_mapping() {
                return Err(malformed(path, format!("{} is not a mapping", context)));
            }

            let rate = numeric_or_zero(config, "burn_rate_threshold", path, &context)?;
            if rate.value > MAX_BURN_RATE_THRESHOLD {
                let window = config
                    .get("long_window")
                    .map(scalar_text)
                    .unwrap_or_else(|| "unknown".to_string());
                issues.push(Issue::warning(
                    path,
                    format!("Very high burn rate {}x for {} window", rate.text, window),
                ));
            }
        }
    }

    debug!("Burn-rate check on {}: {} issue(s)", path.display(), issues.len());
    Ok(issues)
}

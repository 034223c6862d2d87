//! Configuration management for the SLO toolkit.
//!
//! This module handles loading, merging, and validating configuration from files
//! and CLI arguments. It supports YAML, JSON, and TOML formats.

use crate::cli::{AuditArgs, BudgetArgs, ConfigArgs, ConfigFormat, LogLevel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

// Default configuration constants
pub const DEFAULT_SLO_TARGET: f64 = 99.9;
pub const DEFAULT_INCIDENT_MINUTES: f64 = 12.0;
pub const DEFAULT_SERVICE_NAME: &str = "Payment Service";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Locations probed when no `--config` is given.
pub const DEFAULT_CONFIG_LOCATIONS: [&str; 5] = [
    "/etc/slo-toolkit/config.yaml",
    "./slo-toolkit.yaml",
    "./slo-toolkit.yml",
    "./slo-toolkit.json",
    "./slo-toolkit.toml",
];

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {}", .path.display(), .source)]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON in {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {}: {}", .path.display(), .source)]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{0}")]
    Invalid(String),
}

/// Settings for the error budget report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSettings {
    /// SLO target in percent (default: 99.9)
    #[serde(default = "default_slo_target", alias = "slo-target")]
    pub slo_target: f64,

    /// SLO window in days (default: 30)
    #[serde(default = "default_window_days", alias = "window-days")]
    pub window_days: u32,

    /// Example incident duration in minutes (default: 12)
    #[serde(default = "default_incident_minutes", alias = "incident-minutes")]
    pub incident_minutes: f64,

    /// Service name printed in the report header
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_slo_target() -> f64 {
    DEFAULT_SLO_TARGET
}
fn default_window_days() -> u32 {
    crate::budget::DEFAULT_WINDOW_DAYS
}
fn default_incident_minutes() -> f64 {
    DEFAULT_INCIDENT_MINUTES
}
fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            slo_target: default_slo_target(),
            window_days: default_window_days(),
            incident_minutes: default_incident_minutes(),
            service_name: default_service_name(),
        }
    }
}

/// Settings for the configuration auditor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSettings {
    /// Scan root; derived from the executable location when unset
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Coloured terminal output (default: true)
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            root: None,
            color: default_color(),
        }
    }
}

/// Effective toolkit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // Logging
    #[serde(default = "default_log_level", alias = "log-level")]
    pub log_level: String,

    #[serde(default)]
    pub budget: BudgetSettings,

    #[serde(default)]
    pub audit: AuditSettings,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            budget: BudgetSettings::default(),
            audit: AuditSettings::default(),
        }
    }
}

impl Config {
    /// Log level from the config file; callers validate before relying on it.
    pub fn effective_log_level(&self) -> LogLevel {
        LogLevel::from_name(&self.log_level).unwrap_or(LogLevel::Warn)
    }
}

/// Validate effective config (used by --check-config and at startup)
pub fn validate_effective_config(cfg: &Config) -> Result<(), ConfigError> {
    if LogLevel::from_name(&cfg.log_level).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid log_level '{}', expected one of off, error, warn, info, debug, trace",
            cfg.log_level
        )));
    }

    // slo_target is not range-checked; out-of-range targets yield the raw budget.
    if cfg.budget.window_days == 0 {
        return Err(ConfigError::Invalid(
            "budget.window_days must be at least 1".into(),
        ));
    }

    let incident = cfg.budget.incident_minutes;
    if !incident.is_finite() || incident <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "budget.incident_minutes must be a positive number, got {}",
            incident
        )));
    }

    if cfg.budget.service_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "budget.service_name must not be empty".into(),
        ));
    }

    if let Some(root) = &cfg.audit.root {
        if root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("audit.root must not be empty".into()));
        }
    }

    Ok(())
}

/// Loads the config file (or defaults) and applies the shared CLI flags.
fn resolve_common(args: &ConfigArgs) -> Result<Config, ConfigError> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref())?
    };

    // CLI wins if provided
    if let Some(level) = args.log_level {
        config.log_level = format!("{:?}", level).to_ascii_lowercase();
    }

    Ok(config)
}

/// Resolves the budget estimator configuration.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_budget_config(args: &BudgetArgs) -> Result<Config, ConfigError> {
    let mut config = resolve_common(&args.common)?;

    if let Some(target) = args.slo_target {
        config.budget.slo_target = target;
    }
    if let Some(days) = args.window_days {
        config.budget.window_days = days;
    }
    if let Some(minutes) = args.incident_minutes {
        config.budget.incident_minutes = minutes;
    }
    if let Some(service) = &args.service {
        config.budget.service_name = service.clone();
    }

    Ok(config)
}

/// Resolves the auditor configuration.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_audit_config(args: &AuditArgs) -> Result<Config, ConfigError> {
    let mut config = resolve_common(&args.common)?;

    if let Some(root) = &args.root {
        config.audit.root = Some(root.clone());
    }
    if args.no_color {
        config.audit.color = false;
    }

    Ok(config)
}

/// Configuration loading with multiple format support
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
        {
            Some(found) => found.to_path_buf(),
            None => return Ok(Config::default()),
        },
    };

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    parse_config(&path, &content)
}

/// Parses config text, picking the format from the file extension.
fn parse_config(path: &Path, content: &str) -> Result<Config, ConfigError> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let config: Config =
                serde_json::from_str(content).map_err(|source| ConfigError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("Loaded JSON configuration from: {}", path.display());
            Ok(config)
        }
        Some("toml") => {
            let config: Config = toml::from_str(content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Loaded TOML configuration from: {}", path.display());
            Ok(config)
        }
        _ => {
            // Default to YAML; an empty file means "all defaults"
            if content.trim().is_empty() {
                return Ok(Config::default());
            }
            let config: Config =
                serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("Loaded YAML configuration from: {}", path.display());
            Ok(config)
        }
    }
}

/// Renders configuration in the requested format
pub fn render_config(config: &Config, format: ConfigFormat) -> anyhow::Result<String> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(output)
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: ConfigFormat) -> anyhow::Result<()> {
    println!("{}", render_config(config, format)?);
    Ok(())
}

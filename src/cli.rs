//! CLI arguments for the `error-budget` and `config-audit` binaries.
//!
//! Both binaries share the [`ConfigArgs`] flag group (config file handling and
//! logging), and add their own overrides on top of it.

use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parses a level name as it appears in a config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Configuration format options for output
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Config file and logging flags shared by both binaries.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,

    /// Log level (overrides log_level from the config file)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Default for ConfigFormat {
    fn default() -> Self {
        ConfigFormat::Yaml
    }
}

/// Arguments for the error budget estimator.
#[derive(Parser, Debug)]
#[command(
    name = "error-budget",
    about = "Show how an error budget behaves for an SLO and a set of burn rates",
    long_about = "Show how an error budget behaves for an SLO and a set of burn rates.\n\n\
                  Prints the monthly/daily/hourly budget, time to exhaustion for four \
                  standard burn-rate alert tiers, the impact of an example incident and \
                  the resulting error budget policy tier.",
    version,
    propagate_version = true
)]
pub struct BudgetArgs {
    #[command(flatten)]
    pub common: ConfigArgs,

    /// SLO target in percent (e.g. 99.9)
    #[arg(long, allow_negative_numbers = true)]
    pub slo_target: Option<f64>,

    /// SLO window in days
    #[arg(long)]
    pub window_days: Option<u32>,

    /// Duration of the example incident in minutes
    #[arg(long)]
    pub incident_minutes: Option<f64>,

    /// Service name shown in the report header
    #[arg(long)]
    pub service: Option<String>,
}

/// Arguments for the configuration auditor.
#[derive(Parser, Debug)]
#[command(
    name = "config-audit",
    about = "Validate YAML/JSON syntax and SLO/alerting thresholds under a project tree",
    long_about = "Validate YAML/JSON syntax and SLO/alerting thresholds under a project tree.\n\n\
                  Every *.yaml, *.yml and *.json file below the scan root is parsed and \
                  reported. When datadog/slos/slo-definitions.yaml or \
                  datadog/monitors/alert-definitions.yaml exist, their objectives and \
                  burn-rate thresholds are checked as well. Findings never fail the run.",
    version,
    propagate_version = true
)]
pub struct AuditArgs {
    #[command(flatten)]
    pub common: ConfigArgs,

    /// Scan root (default: parent of the directory holding the executable)
    #[arg(short = 'r', long)]
    pub root: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

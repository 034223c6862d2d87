//! config-audit - observability configuration validator
//!
//! Checks YAML/JSON syntax for every config file under the scan root and
//! applies SLO and burn-rate threshold heuristics to the Datadog definitions.
//! Findings are reported, never turned into a failing exit code.

use anyhow::Context;
use clap::Parser;

use slo_toolkit::cli::AuditArgs;
use slo_toolkit::commands::command_audit;
use slo_toolkit::config::{resolve_audit_config, show_config, validate_effective_config};
use slo_toolkit::logging::setup_logging;

fn main() -> anyhow::Result<()> {
    let args = AuditArgs::parse();

    let config = resolve_audit_config(&args).context("Failed to load configuration")?;

    if let Err(e) = validate_effective_config(&config) {
        eprintln!("❌ Configuration invalid: {}", e);
        std::process::exit(1);
    }

    if args.common.check_config {
        println!("✅ Configuration is valid");
        return Ok(());
    }

    if args.common.show_config {
        return show_config(&config, args.common.config_format);
    }

    setup_logging(config.effective_log_level())?;

    command_audit(&config)
}

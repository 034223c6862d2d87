//! error-budget - error budget calculator
//!
//! Prints how much downtime an SLO allows, how fast standard burn rates
//! exhaust it, and which budget policy tier an example incident leads to.

use anyhow::Context;
use clap::Parser;

use slo_toolkit::cli::BudgetArgs;
use slo_toolkit::commands::command_budget;
use slo_toolkit::config::{resolve_budget_config, show_config, validate_effective_config};
use slo_toolkit::logging::setup_logging;

fn main() -> anyhow::Result<()> {
    let args = BudgetArgs::parse();

    let config = resolve_budget_config(&args).context("Failed to load configuration")?;

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

    command_budget(&config)
}

//! Budget command implementation.
//!
//! Prints the error budget report for the configured SLO.

use std::io::{self, Write};
use tracing::info;

use crate::budget::BudgetReport;
use crate::config::Config;

/// Builds the error budget report and writes it to stdout.
pub fn command_budget(config: &Config) -> anyhow::Result<()> {
    let settings = &config.budget;
    info!(
        "Computing error budget for {} ({}% over {} days)",
        settings.service_name, settings.slo_target, settings.window_days
    );

    let report = BudgetReport::build(settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.render(&mut out)?;
    out.flush()?;
    Ok(())
}

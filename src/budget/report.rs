//! The error budget narrative report.
//!
//! [`BudgetReport::build`] computes every figure up front; [`BudgetReport::render`]
//! only formats them.

use std::io::{self, Write};
use tracing::debug;

use super::policy::{select_policy, BurnRateScenario, PolicyTier, BURN_RATE_SCENARIOS};
use super::{compute_error_budget, estimate_exhaustion, BudgetError, Exhaustion};
use crate::config::BudgetSettings;

const BANNER_WIDTH: usize = 50;
const SECTION_WIDTH: usize = 40;

/// Exhaustion estimate for one burn-rate tier.
#[derive(Debug, Clone)]
pub struct ScenarioImpact {
    pub scenario: BurnRateScenario,
    pub exhaustion: Exhaustion,
}

/// What a single incident of the configured length costs.
#[derive(Debug, Clone)]
pub struct IncidentImpact {
    pub duration_minutes: f64,
    pub consumed_percent: f64,
    pub remaining_minutes: f64,
    pub remaining_percent: f64,
    /// How many such incidents fit in the window budget
    pub incidents_allowed: i64,
}

impl IncidentImpact {
    pub fn new(duration_minutes: f64, budget_minutes: f64) -> Self {
        let consumed_percent = duration_minutes / budget_minutes * 100.0;
        Self {
            duration_minutes,
            consumed_percent,
            remaining_minutes: budget_minutes - duration_minutes,
            remaining_percent: 100.0 - consumed_percent,
            incidents_allowed: (budget_minutes / duration_minutes).floor() as i64,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BudgetReport {
    pub service_name: String,
    pub slo_target: f64,
    pub window_days: u32,
    pub budget_minutes: f64,
    pub daily_minutes: f64,
    pub hourly_minutes: f64,
    pub scenarios: Vec<ScenarioImpact>,
    pub incident: IncidentImpact,
    pub policy: PolicyTier,
}

impl BudgetReport {
    pub fn build(settings: &BudgetSettings) -> Result<Self, BudgetError> {
        let budget_minutes = compute_error_budget(settings.slo_target, settings.window_days);
        let daily_minutes = budget_minutes / f64::from(settings.window_days);
        let hourly_minutes = daily_minutes / 24.0;
        debug!(
            "Error budget for {}% over {} days: {} minutes",
            settings.slo_target, settings.window_days, budget_minutes
        );

        let scenarios = BURN_RATE_SCENARIOS
            .iter()
            .map(|scenario| {
                estimate_exhaustion(scenario.rate, budget_minutes).map(|exhaustion| {
                    ScenarioImpact {
                        scenario: *scenario,
                        exhaustion,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let incident = IncidentImpact::new(settings.incident_minutes, budget_minutes);
        let policy = select_policy(incident.remaining_percent);

        Ok(Self {
            service_name: settings.service_name.clone(),
            slo_target: settings.slo_target,
            window_days: settings.window_days,
            budget_minutes,
            daily_minutes,
            hourly_minutes,
            scenarios,
            incident,
            policy,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "💰 Error Budget Calculator")?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

        section(
            out,
            &format!("📊 {} SLO: {}% availability", self.service_name, self.slo_target),
        )?;
        if self.window_days == 30 {
            writeln!(out, "Monthly error budget: {:.1} minutes", self.budget_minutes)?;
        } else {
            writeln!(
                out,
                "{}-day error budget: {:.1} minutes",
                self.window_days, self.budget_minutes
            )?;
        }
        writeln!(out, "Daily budget: {:.1} minutes", self.daily_minutes)?;
        writeln!(out, "Hourly budget: {:.2} minutes", self.hourly_minutes)?;

        section(out, "🔥 Burn Rate Scenarios")?;
        for impact in &self.scenarios {
            writeln!(out)?;
            writeln!(out, "Burn rate: {}x", impact.scenario.rate)?;
            writeln!(out, "Severity: {}", impact.scenario.label())?;
            writeln!(
                out,
                "Budget exhausted in: {:.1} days ({:.0} hours)",
                impact.exhaustion.days, impact.exhaustion.hours
            )?;
        }

        section(out, "💥 Example Incident Impact")?;
        let incident = &self.incident;
        writeln!(out, "Incident duration: {} minutes", incident.duration_minutes)?;
        writeln!(out, "Budget consumed: {:.1}%", incident.consumed_percent)?;
        writeln!(
            out,
            "Budget remaining: {:.1} minutes ({:.1}%)",
            incident.remaining_minutes, incident.remaining_percent
        )?;
        let period = if self.window_days == 30 { "month" } else { "window" };
        writeln!(
            out,
            "Incidents allowed this {}: {}",
            period, incident.incidents_allowed
        )?;

        section(out, "📋 Error Budget Policy")?;
        writeln!(out, "{} Status: {}", self.policy.icon(), self.policy.label())?;
        for action in self.policy.actions() {
            writeln!(out, "   - {}", action)?;
        }

        Ok(())
    }
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(SECTION_WIDTH))
}

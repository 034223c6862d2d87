//! Error budget arithmetic.
//!
//! The formulas here are unguarded: an SLO target above 100% yields a
//! negative budget and a negative burn rate yields a negative time to
//! exhaustion. The only rejected input is a burn rate of exactly zero.

pub mod policy;
pub mod report;

pub use policy::{select_policy, BurnRateScenario, PolicyTier, BURN_RATE_SCENARIOS, POLICY_BANDS};
pub use report::{BudgetReport, IncidentImpact, ScenarioImpact};

/// Default SLO window in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Nominal period a burn rate of 1x takes to consume the whole budget.
pub const NOMINAL_PERIOD_DAYS: f64 = 30.0;

pub const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BudgetError {
    #[error("burn rate must be non-zero to estimate budget exhaustion")]
    ZeroBurnRate,
}

/// Time until the budget is gone at a given burn rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exhaustion {
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
}

/// Allowed downtime in minutes for `slo_target` percent over `window_days`.
pub fn compute_error_budget(slo_target: f64, window_days: u32) -> f64 {
    let total_minutes = f64::from(window_days) * MINUTES_PER_DAY;
    total_minutes * (1.0 - slo_target / 100.0)
}

/// Time to exhaustion at `burn_rate`, anchored on the 30-day nominal period.
///
/// `budget_minutes` is accepted for the caller's convenience but does not
/// enter the calculation: a burn rate is already relative to the budget.
pub fn estimate_exhaustion(burn_rate: f64, _budget_minutes: f64) -> Result<Exhaustion, BudgetError> {
    if burn_rate == 0.0 {
        return Err(BudgetError::ZeroBurnRate);
    }

    let days = NOMINAL_PERIOD_DAYS / burn_rate;
    let hours = days * 24.0;
    Ok(Exhaustion {
        days,
        hours,
        minutes: hours * 60.0,
    })
}

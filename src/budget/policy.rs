//! Ordered lookup tables for burn-rate alert tiers and error budget policy.

use std::fmt;

/// One row of the burn-rate alerting table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnRateScenario {
    /// Budget consumption relative to the nominal rate
    pub rate: f64,
    pub severity: &'static str,
    pub action: &'static str,
}

impl BurnRateScenario {
    /// Label as printed in the report, e.g. "CRITICAL - Page immediately".
    pub fn label(&self) -> String {
        format!("{} - {}", self.severity, self.action)
    }
}

/// Multi-window burn-rate tiers, fastest burn first.
pub const BURN_RATE_SCENARIOS: [BurnRateScenario; 4] = [
    BurnRateScenario {
        rate: 14.4,
        severity: "CRITICAL",
        action: "Page immediately",
    },
    BurnRateScenario {
        rate: 6.0,
        severity: "HIGH",
        action: "Page within 15 min",
    },
    BurnRateScenario {
        rate: 3.0,
        severity: "MEDIUM",
        action: "Create ticket",
    },
    BurnRateScenario {
        rate: 1.0,
        severity: "LOW",
        action: "Monitor closely",
    },
];

/// Error budget policy tier, from healthiest to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyTier {
    Normal,
    IncreasedFocus,
    FeatureFreeze,
    Emergency,
}

impl PolicyTier {
    pub fn label(&self) -> &'static str {
        match self {
            PolicyTier::Normal => "NORMAL OPERATIONS",
            PolicyTier::IncreasedFocus => "INCREASED FOCUS",
            PolicyTier::FeatureFreeze => "FEATURE FREEZE",
            PolicyTier::Emergency => "EMERGENCY MODE",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PolicyTier::Normal => "✅",
            PolicyTier::IncreasedFocus => "⚠️ ",
            PolicyTier::FeatureFreeze => "🚫",
            PolicyTier::Emergency => "🆘",
        }
    }

    /// The two recommended actions for this tier.
    pub fn actions(&self) -> [&'static str; 2] {
        match self {
            PolicyTier::Normal => [
                "Feature development allowed",
                "Standard deployment procedures",
            ],
            PolicyTier::IncreasedFocus => [
                "Extra testing required",
                "Extended monitoring after deployments",
            ],
            PolicyTier::FeatureFreeze => [
                "Only bug fixes allowed",
                "SRE approval for all changes",
            ],
            PolicyTier::Emergency => ["No deployments", "All hands on reliability"],
        }
    }
}

impl fmt::Display for PolicyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `(threshold, tier)` bands in descending threshold order. A tier applies
/// when the remaining percentage is strictly greater than its threshold.
pub const POLICY_BANDS: [(f64, PolicyTier); 3] = [
    (50.0, PolicyTier::Normal),
    (25.0, PolicyTier::IncreasedFocus),
    (10.0, PolicyTier::FeatureFreeze),
];

/// First matching band wins; everything below the last band is an emergency.
pub fn select_policy(remaining_percent: f64) -> PolicyTier {
    POLICY_BANDS
        .iter()
        .find(|(threshold, _)| remaining_percent > *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(PolicyTier::Emergency)
}

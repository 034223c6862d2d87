//! SLO Toolkit Library
//!
//! Two small operator utilities for a site-reliability workflow, exposed as
//! the `error-budget` and `config-audit` binaries:
//!
//! - **Error budget estimator** ([`budget`]): allowed downtime for an SLO,
//!   time to exhaustion at standard burn rates, incident impact and the
//!   resulting error budget policy tier.
//! - **Configuration auditor** ([`audit`]): YAML/JSON syntax validation for a
//!   whole project tree plus threshold heuristics for Datadog SLO and
//!   multi-burn-rate monitor definitions.
//!
//! # Usage
//!
//! ```rust
//! use slo_toolkit::budget::{compute_error_budget, estimate_exhaustion, select_policy, PolicyTier};
//!
//! // 99.9% over 30 days leaves 43.2 minutes of downtime
//! let budget = compute_error_budget(99.9, 30);
//! assert!((budget - 43.2).abs() < 1e-9);
//!
//! // A 14.4x burn rate exhausts it in about two days
//! let impact = estimate_exhaustion(14.4, budget).unwrap();
//! assert!((impact.days - 2.083).abs() < 1e-3);
//!
//! assert_eq!(select_policy(72.2), PolicyTier::Normal);
//! ```

pub mod audit;
pub mod budget;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Re-export main types for convenience
pub use audit::{run_audit, AuditError, AuditReport, FileFormat, Issue};
pub use budget::{compute_error_budget, estimate_exhaustion, BudgetError, BudgetReport, Exhaustion};
pub use config::{Config, ConfigError};

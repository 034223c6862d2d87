//! Command implementations behind the two binaries:
//! - `budget`: error budget report (`error-budget`)
//! - `audit`: configuration audit (`config-audit`)

pub mod audit;
pub mod budget;

// Re-export command functions
pub use audit::{command_audit, resolve_scan_root};
pub use budget::command_budget;

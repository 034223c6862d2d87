//! Audit command implementation.
//!
//! Scans the project tree and prints the audit report.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::audit::run_audit;
use crate::config::Config;

/// Parent of the directory holding the executable (e.g. `<root>/bin/tool`).
fn root_from_executable(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

/// Resolves the scan root: configured root > executable-derived > cwd.
pub fn resolve_scan_root(config: &Config) -> PathBuf {
    if let Some(root) = &config.audit.root {
        return root.clone();
    }

    match env::current_exe() {
        Ok(exe) => {
            if let Some(root) = root_from_executable(&exe) {
                return root;
            }
            warn!(
                "Executable path {} has no grandparent, scanning current directory",
                exe.display()
            );
        }
        Err(e) => warn!("Cannot locate executable ({}), scanning current directory", e),
    }
    PathBuf::from(".")
}

/// Runs the audit and writes the report to stdout.
///
/// Findings never turn into an error; only a failure to write output does.
pub fn command_audit(config: &Config) -> anyhow::Result<()> {
    let root = resolve_scan_root(config);
    info!("Auditing configuration under {}", root.display());

    let report = run_audit(&root);
    info!(
        "Validated {} files ({} with syntax errors)",
        report.yaml.len() + report.json.len(),
        report.syntax_failures()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.render(&mut out, config.audit.color)?;
    out.flush()?;
    Ok(())
}

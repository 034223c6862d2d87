//! Tracing setup shared by both binaries.
//!
//! Logs go to stderr so the report on stdout stays clean.

use tracing::{info, Level};

use crate::cli::LogLevel;

/// Maps a CLI/config log level onto a tracing level. `Off` maps to `None`.
pub fn tracing_level(level: LogLevel) -> Option<Level> {
    match level {
        LogLevel::Off => None,
        LogLevel::Error => Some(Level::ERROR),
        LogLevel::Warn => Some(Level::WARN),
        LogLevel::Info => Some(Level::INFO),
        LogLevel::Debug => Some(Level::DEBUG),
        LogLevel::Trace => Some(Level::TRACE),
    }
}

/// Initializes tracing logging subsystem with configured log level.
pub fn setup_logging(level: LogLevel) -> anyhow::Result<()> {
    let Some(max_level) = tracing_level(level) else {
        return Ok(());
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    info!("Logging initialized with level: {:?}", level);
    Ok(())
}

// Rust guideline compliant 2026-10-19

//! Tracing setup for the issuedesk CLI.
//!
//! Logs go to stderr so stdout stays clean for command output and the
//! session protocol.

use anyhow::{bail, Result};
use issuedesk_core::{Config, LogFormat};
use std::fs::OpenOptions;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global subscriber described by `config`.
///
/// # Returns
///
/// A guard that must be held until exit when logging to a file.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&config.log_level)?;

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let builder = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer);
        let _ = match config.log_format {
            LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
            LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        };
        return Ok(Some(guard));
    }

    let builder = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);
    let _ = match config.log_format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
    };
    Ok(None)
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Invalid log level: {}", other),
    }
}

//! Structured logging with tracing
//!
//! Provides centralized logging configuration using the tracing ecosystem:
//! an `EnvFilter` (from `VELD_LOG` or the configured level), plain or JSON
//! output on stderr, and optional daily-rotated file output.

use std::ffi::OsStr;
use std::path::Path;

use tracing::{Level, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};
use veld_domain::error::{Error, Result};

use crate::constants::{LOG_DEFAULT_FILE_PREFIX, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// Fails when the level is invalid, the log file cannot be opened, or a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config
        .file_output
        .as_deref()
        .map(|path| file_appender(path, config.max_files))
        .transpose()?;

    // Layer types differ between plain and JSON output, hence two branches
    if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        Registry::default()
            .with(filter)
            .with(stderr)
            .with(file)
            .try_init()
            .config_context("Failed to install tracing subscriber")?;
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        Registry::default()
            .with(filter)
            .with(stderr)
            .with(file)
            .try_init()
            .config_context("Failed to install tracing subscriber")?;
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

fn file_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(LOG_DEFAULT_FILE_PREFIX))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(max_files)
        .build(directory)
        .io_context(format!("Failed to open log file in {}", directory.display()))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

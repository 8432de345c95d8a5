// Rust guideline compliant 2026-10-19

//! Tracing setup for the `tix` binary.
//!
//! Console events go to stderr so they never interleave with the menu on
//! stdout. With a log file configured, events are written there as JSON.

use std::fs::OpenOptions;
use tix_core::{Config, LogLevel};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Maps a configured log level onto a tracing level.
pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Installs the global tracing subscriber.
///
/// # Returns
///
/// The writer guard when logging to a file; it must be kept alive until the
/// program exits so buffered events are flushed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(config: &Config) -> std::io::Result<Option<WorkerGuard>> {
    let level = tracing_level(config.log_level);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(tracing_level(LogLevel::Error), Level::ERROR);
        assert_eq!(tracing_level(LogLevel::Warn), Level::WARN);
        assert_eq!(tracing_level(LogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_init_tracing_with_log_file_returns_guard() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            log_file: Some(temp_dir.path().join("tix.log")),
            ..Config::default()
        };

        let guard = init_tracing(&config).unwrap();
        assert!(guard.is_some());
        assert!(temp_dir.path().join("tix.log").exists());
    }
}

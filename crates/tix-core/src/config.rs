// Rust guideline compliant 2026-10-19

//! Configuration management for Tix.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Rendering used for the list and view screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable console text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parses an output format name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not `text` or `json`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::InvalidConfig(format!(
                "output format must be text or json, got {}",
                value
            ))),
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational events.
    Info,
    /// Debug events.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Parses a log level name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a known level.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(Error::InvalidConfig(format!(
                "log level must be error, warn, info, debug, or trace, got {}",
                value
            ))),
        }
    }
}

/// Configuration for the Tix console.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Rendering for list and view output.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether colored output is allowed.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Minimum level of emitted log events.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Optional file receiving JSON log events instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            color: default_color(),
            log_level: LogLevel::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if one is given
    /// 3. Environment variables with `TIX_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The given file cannot be read
    /// - The file contains invalid TOML
    /// - An environment variable holds an invalid value
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TIX_OUTPUT_FORMAT` - Output format (text/json)
    /// - `TIX_COLOR` - Whether to allow colors (true/false)
    /// - `TIX_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `TIX_LOG_FILE` - Path of the JSON log file
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TIX_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val)?;
        }

        if let Ok(val) = std::env::var("TIX_COLOR") {
            self.color = val.parse().map_err(|_| {
                Error::InvalidConfig("TIX_COLOR must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TIX_LOG_LEVEL") {
            self.log_level = LogLevel::parse(&val)?;
        }

        if let Ok(val) = std::env::var("TIX_LOG_FILE") {
            if !val.is_empty() {
                self.log_file = Some(PathBuf::from(val));
            }
        }

        Ok(())
    }
}

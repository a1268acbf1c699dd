// Rust guideline compliant 2026-10-19

//! Configuration management for issuedesk.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "issuedesk.toml";

/// Upper bound for the simulated backend latency.
const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Format of emitted log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration for issuedesk behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON seed with users and issues; the builtin demo seed when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,

    /// Delay added before each issue operation, in milliseconds.
    #[serde(default)]
    pub simulated_latency_ms: u64,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log line format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log to this file instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            simulated_latency_ms: 0,
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, or `issuedesk.toml` in the working
    ///    directory if it exists
    /// 3. Environment variables with `ISSUEDESK_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Explicit configuration file path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit configuration file does not exist or cannot be read
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Loads configuration using `env` to read environment variables.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::read_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("Cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `ISSUEDESK_SEED_PATH` - Seed file path
    /// - `ISSUEDESK_SIMULATED_LATENCY_MS` - Simulated latency in milliseconds
    /// - `ISSUEDESK_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `ISSUEDESK_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `ISSUEDESK_LOG_FORMAT` - Log format (text/json)
    /// - `ISSUEDESK_LOG_FILE` - Log file path
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env("ISSUEDESK_SEED_PATH") {
            self.seed_path = Some(PathBuf::from(val));
        }

        if let Some(val) = env("ISSUEDESK_SIMULATED_LATENCY_MS") {
            self.simulated_latency_ms = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "ISSUEDESK_SIMULATED_LATENCY_MS must be a non-negative number".to_string(),
                )
            })?;
        }

        if let Some(val) = env("ISSUEDESK_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "ISSUEDESK_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = env("ISSUEDESK_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Some(val) = env("ISSUEDESK_LOG_FORMAT") {
            self.log_format = match val.as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(Error::InvalidConfig(
                        "ISSUEDESK_LOG_FORMAT must be text or json".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = env("ISSUEDESK_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - simulated_latency_ms exceeds 10 seconds
    /// - log_level is not a known level
    fn validate(&self) -> Result<()> {
        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(Error::InvalidConfig(format!(
                "simulated_latency_ms must be at most {}, got {}",
                MAX_SIMULATED_LATENCY_MS, self.simulated_latency_ms
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}

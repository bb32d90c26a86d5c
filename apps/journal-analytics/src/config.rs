//! Configuration for the journal analytics engine.
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_analytics::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("date field: {}", config.analytics.date_field);
//! ```
//!
//! # Example
//!
//! ```yaml
//! analytics:
//!   date_field: ${JOURNAL_DATE_FIELD:-exit}
//!   display_precision: 2
//!   daily_window_days: 30
//!   default_period: 30d
//! logging:
//!   level: info
//!   json: false
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytics::ReportingPeriod;
use crate::domain::DateField;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Errors while loading [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Cannot read analytics config '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The YAML is malformed or has unknown enum values.
    #[error("Invalid analytics config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// A value is out of range.
    #[error("Analytics config rejected: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Aggregation settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Aggregation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Timestamp used for ordering and bucketing.
    #[serde(default)]
    pub date_field: DateField,
    /// Decimal places used when rounding for display.
    #[serde(default = "default_display_precision")]
    pub display_precision: u32,
    /// Trailing window of the overview's daily P&L.
    #[serde(default = "default_daily_window_days")]
    pub daily_window_days: u32,
    /// Period used when a report does not name one.
    #[serde(default)]
    pub default_period: ReportingPeriod,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            date_field: DateField::default(),
            display_precision: default_display_precision(),
            daily_window_days: default_daily_window_days(),
            default_period: ReportingPeriod::default(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

const fn default_display_precision() -> u32 {
    2
}

const fn default_daily_window_days() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)]
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static PLACEHOLDER: OnceLock<regex::Regex> = OnceLock::new();

    let re = PLACEHOLDER.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("placeholder pattern compiles")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.analytics.display_precision > 10 {
        return Err(ConfigError::ValidationError(
            "analytics.display_precision must be at most 10".to_string(),
        ));
    }

    if config.analytics.daily_window_days == 0 {
        return Err(ConfigError::ValidationError(
            "analytics.daily_window_days must be positive".to_string(),
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "logging.level must be one of: {valid_levels:?}"
        )));
    }

    Ok(())
}

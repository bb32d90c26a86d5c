//! Tracing subscriber setup.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Overrides the configured level when set (standard `EnvFilter` syntax)
//!
//! # Usage
//!
//! ```ignore
//! use journal_analytics::{config::LoggingConfig, telemetry};
//!
//! telemetry::init_tracing(&LoggingConfig::default())?;
//! tracing::info!("ready");
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Errors while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The level could not be turned into a filter directive.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    InitError(String),
}

/// Filter directive used when `RUST_LOG` is unset.
///
/// Dependencies stay at `warn`; this crate logs at the configured level.
#[must_use]
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("warn,journal_analytics={}", config.level.to_ascii_lowercase())
}

/// Build the filter: `RUST_LOG` if present, otherwise [`default_directive`].
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(default_directive(config))?)
}

/// Install the global tracing subscriber.
///
/// Writes human-readable lines, or JSON lines when `config.json` is set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| TelemetryError::InitError(e.to_string()))
}

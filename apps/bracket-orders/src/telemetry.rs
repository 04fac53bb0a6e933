//! Tracing Setup
//!
//! Console logging through `tracing-subscriber`, configured from
//! `observability.logging`.
//!
//! - `RUST_LOG` overrides `logging.level` when set.
//! - `logging.format` selects `json` (one object per line) or `pretty`.
//! - `logging.include_spans` attaches the current span (and its `run_id`)
//!   to each JSON line.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bracket_orders::config::LoggingConfig;
//! use bracket_orders::telemetry::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors from subscriber setup.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// `logging.level` is not a valid filter directive.
    #[error("Invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` if set, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|source| TelemetryError::InvalidFilter {
        directive: config.level.clone(),
        source,
    })
}

/// Initialize the global tracing subscriber.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    let result = if config.format == "pretty" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

//! Configuration for a bracket placement run.
//!
//! Loads YAML with environment variable interpolation and validates it
//! before anything is sized or sent.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bracket_orders::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("configs/amd.yaml"))?;
//!
//! println!("risking {} on {}", config.order.max_risk_per_position, config.order.symbol);
//! ```

mod broker;
mod observability;
mod order;
mod submission;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use broker::BrokerConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use order::{EntryConfig, OrderConfig};
pub use submission::SubmissionConfig;

use crate::application::use_cases::PlaceBracketOrderRequest;
use crate::domain::bracket_order::BracketOrderBuilder;
use crate::domain::shared::Symbol;
use crate::risk::sizing::{PositionSizer, PositionSizerConfig};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Order to size and build.
    pub order: OrderConfig,
    /// Submission guard.
    #[serde(default)]
    pub submission: SubmissionConfig,
    /// Broker configuration.
    #[serde(default)]
    pub broker: BrokerConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Position sizer for the configured rounding.
    #[must_use]
    pub const fn position_sizer(&self) -> PositionSizer {
        PositionSizer::with_config(PositionSizerConfig {
            rounding: self.order.rounding,
        })
    }

    /// Order builder for the configured entry session.
    #[must_use]
    pub const fn order_builder(&self) -> BracketOrderBuilder {
        BracketOrderBuilder::with_entry_session(self.order.session)
    }

    /// The placement request this configuration describes.
    #[must_use]
    pub fn placement_request(&self) -> PlaceBracketOrderRequest {
        PlaceBracketOrderRequest {
            symbol: Symbol::new(&self.order.symbol),
            max_risk_amount: self.order.max_risk_per_position,
            entry: self.order.entry.into(),
            account_id: self.broker.account_id.clone(),
            submit: self.submission.enabled,
        }
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
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

/// Load configuration from a YAML string (useful for testing).
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
/// Supports both `${VAR}` and `${VAR:-default}` syntax. A variable that is
/// unset or empty takes its default, or the empty string without one.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map_or("", |m| m.as_str());
        match caps.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    Symbol::new(&config.order.symbol)
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("order.symbol: {e}")))?;

    let valid_formats = ["json", "pretty"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    if config.broker.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "broker.timeout_secs must be positive".to_string(),
        ));
    }

    let needs_broker = config.submission.enabled || config.order.entry.needs_quote();
    if needs_broker && config.broker.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "broker.base_url is required".to_string(),
        ));
    }

    if config.order.entry.needs_quote() && config.broker.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "broker.api_key is required for breakout entries".to_string(),
        ));
    }

    if config.submission.enabled {
        if config.broker.account_id.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "broker.account_id is required when submission is enabled".to_string(),
            ));
        }
        if config.broker.token_path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "broker.token_path is required when submission is enabled".to_string(),
            ));
        }
    }

    Ok(())
}

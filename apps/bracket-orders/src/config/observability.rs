//! Observability configuration for logging.

use serde::{Deserialize, Serialize};

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: `json` or `pretty`.
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Include span information.
    #[serde(default = "default_true")]
    pub include_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            include_spans: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

const fn default_true() -> bool {
    true
}

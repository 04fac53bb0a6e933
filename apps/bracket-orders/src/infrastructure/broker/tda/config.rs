//! TDA adapter configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::BrokerConfig;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.tdameritrade.com";

/// Configuration for the TDA broker adapter.
#[derive(Debug, Clone)]
pub struct TdaConfig {
    /// API key (client id).
    pub api_key: String,
    /// Account that receives orders.
    pub account_id: String,
    /// JSON token file.
    pub token_path: PathBuf,
    /// API base URL.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl TdaConfig {
    /// Create a new configuration against the production host.
    #[must_use]
    pub fn new(api_key: String, account_id: String, token_path: impl Into<PathBuf>) -> Self {
        Self {
            api_key,
            account_id,
            token_path: token_path.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl From<&BrokerConfig> for TdaConfig {
    fn from(config: &BrokerConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.account_id.clone(),
            &config.token_path,
        )
        .with_base_url(config.base_url.clone())
        .with_timeout(Duration::from_secs(config.timeout_secs))
    }
}

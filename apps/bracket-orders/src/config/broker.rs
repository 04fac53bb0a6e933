//! Broker configuration for quotes and order routing.

use serde::{Deserialize, Serialize};

/// TD Ameritrade-style REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// API key (client id), sent as `apikey` on quote requests.
    #[serde(default)]
    pub api_key: String,
    /// Account that receives orders.
    #[serde(default)]
    pub account_id: String,
    /// JSON token file holding a pre-issued access token.
    #[serde(default = "default_token_path")]
    pub token_path: String,
    /// Base URL for API calls.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            account_id: String::new(),
            token_path: default_token_path(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_token_path() -> String {
    "token.json".to_string()
}

fn default_base_url() -> String {
    "https://api.tdameritrade.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

//! Time in force for orders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time in force specifying order validity duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Valid for current trading day only.
    #[default]
    Day,
    /// Good-til-canceled (broker-specific limit: typically 30-90 days).
    Gtc,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "DAY"),
            Self::Gtc => write!(f, "GTC"),
        }
    }
}

//! What to trade and how much to risk.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::use_cases::EntrySource;
use crate::domain::order_execution::Session;
use crate::risk::sizing::SizingRounding;

/// Order configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Ticker to trade.
    pub symbol: String,
    /// Dollars lost if every tranche is stopped out.
    pub max_risk_per_position: Decimal,
    /// Share count rounding.
    #[serde(default)]
    pub rounding: SizingRounding,
    /// Entry and stop price source.
    pub entry: EntryConfig,
    /// Session the entry order works in.
    #[serde(default)]
    pub session: Session,
}

/// Entry price source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EntryConfig {
    /// Explicit entry and stop.
    Fixed {
        /// Buy stop trigger.
        entry_price: Decimal,
        /// Protective stop.
        stop_price: Decimal,
    },
    /// Session high and low from a live quote.
    Breakout,
}

impl EntryConfig {
    /// Whether a quote lookup is needed.
    #[must_use]
    pub const fn needs_quote(&self) -> bool {
        matches!(self, Self::Breakout)
    }
}

impl From<EntryConfig> for EntrySource {
    fn from(config: EntryConfig) -> Self {
        match config {
            EntryConfig::Fixed {
                entry_price,
                stop_price,
            } => Self::Fixed {
                entry_price,
                stop_price,
            },
            EntryConfig::Breakout => Self::OpeningRangeBreakout,
        }
    }
}

//! Quote Port (Driven Port)
//!
//! Interface for looking up the current session's trading range.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;

/// Snapshot quote carrying the session's high and low.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRangeQuote {
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Session high.
    pub high_price: Decimal,
    /// Session low.
    pub low_price: Decimal,
    /// Last trade price, if reported.
    pub last_price: Option<Decimal>,
    /// Quote time, if reported.
    pub quote_time: Option<DateTime<Utc>>,
}

impl DayRangeQuote {
    /// Create a quote with only the range populated.
    #[must_use]
    pub const fn new(symbol: Symbol, high_price: Decimal, low_price: Decimal) -> Self {
        Self {
            symbol,
            high_price,
            low_price,
            last_price: None,
            quote_time: None,
        }
    }

    /// Entry and stop levels for an opening range breakout: buy above the
    /// high, stop below the low.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::InvertedRange` if the high is below the low.
    pub fn breakout_levels(&self) -> Result<(Decimal, Decimal), QuoteError> {
        if self.high_price < self.low_price {
            return Err(QuoteError::InvertedRange {
                symbol: self.symbol.to_string(),
                high_price: self.high_price,
                low_price: self.low_price,
            });
        }
        Ok((self.high_price, self.low_price))
    }
}

/// Quote lookup error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QuoteError {
    /// The quote's high is below its low.
    #[error("Malformed quote for {symbol}: high {high_price} is below low {low_price}")]
    InvertedRange {
        /// Symbol quoted.
        symbol: String,
        /// Reported high.
        high_price: Decimal,
        /// Reported low.
        low_price: Decimal,
    },

    /// The response did not contain the requested symbol.
    #[error("Symbol not found in quote response: {symbol}")]
    SymbolNotFound {
        /// The missing symbol.
        symbol: String,
    },

    /// The response was missing or had unusable fields.
    #[error("Malformed quote response: {message}")]
    Malformed {
        /// Error details.
        message: String,
    },

    /// The quote source could not be reached or refused the request.
    #[error("Quote unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for quote lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuotePort: Send + Sync {
    /// Get the latest quote for a symbol.
    async fn get_quote(&self, symbol: &Symbol) -> Result<DayRangeQuote, QuoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn breakout_levels_use_high_and_low() {
        let quote = DayRangeQuote::new(Symbol::new("AAPL"), dec!(148.86), dec!(145.26));
        let (entry, stop) = quote.breakout_levels().unwrap();
        assert_eq!(entry, dec!(148.86));
        assert_eq!(stop, dec!(145.26));
    }

    #[test]
    fn breakout_levels_reject_inverted_range() {
        let quote = DayRangeQuote::new(Symbol::new("AAPL"), dec!(145.26), dec!(148.86));
        assert!(matches!(
            quote.breakout_levels(),
            Err(QuoteError::InvertedRange { .. })
        ));
    }

    #[test]
    fn breakout_levels_allow_flat_range() {
        let quote = DayRangeQuote::new(Symbol::new("AAPL"), dec!(100), dec!(100));
        assert!(quote.breakout_levels().is_ok());
    }
}

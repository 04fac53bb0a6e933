//! Error types for position sizing calculations.

use rust_decimal::Decimal;

/// Error during position sizing calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizingError {
    /// Entry is not above the stop, so risk per share is zero or negative.
    #[error(
        "Invalid risk configuration: entry price {entry_price} must be above stop price {stop_price}"
    )]
    InvalidRiskConfiguration {
        /// Requested entry price.
        entry_price: Decimal,
        /// Requested stop price.
        stop_price: Decimal,
    },

    /// The stop is at or below zero.
    #[error("Invalid risk configuration: stop price {stop_price} must be positive")]
    NonPositiveStop {
        /// Requested stop price.
        stop_price: Decimal,
    },

    /// The dollar risk budget is negative.
    #[error("Invalid risk configuration: max risk amount {max_risk_amount} is negative")]
    NegativeRisk {
        /// Requested risk budget.
        max_risk_amount: Decimal,
    },

    /// The share count does not fit in a whole-share quantity.
    #[error("Share count overflow: {max_risk_amount} / {risk_per_share} is out of range")]
    ShareCountOverflow {
        /// Requested risk budget.
        max_risk_amount: Decimal,
        /// Risk per share.
        risk_per_share: Decimal,
    },

    /// R or a profit target falls outside the `Decimal` range.
    #[error("Price overflow: targets for entry {entry_price} and stop {stop_price} are out of range")]
    PriceOverflow {
        /// Requested entry price.
        entry_price: Decimal,
        /// Requested stop price.
        stop_price: Decimal,
    },
}

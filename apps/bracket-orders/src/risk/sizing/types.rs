//! Core types for position sizing calculations.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of exit tranches a position is split into.
pub const TRANCHE_COUNT: usize = 3;

/// Inputs to a sizing calculation for a long position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskParameters {
    /// Price at which the position is entered.
    pub entry_price: Decimal,
    /// Protective stop-loss price.
    pub stop_price: Decimal,
    /// Maximum dollars to lose if the stop is hit.
    pub max_risk_amount: Decimal,
}

impl RiskParameters {
    /// Create a new set of risk parameters.
    #[must_use]
    pub const fn new(entry_price: Decimal, stop_price: Decimal, max_risk_amount: Decimal) -> Self {
        Self {
            entry_price,
            stop_price,
            max_risk_amount,
        }
    }

    /// Dollars at risk per share (one "R").
    ///
    /// Zero or negative when the parameters are invalid for a long position,
    /// `None` when the difference is out of `Decimal` range.
    #[must_use]
    pub fn risk_per_share(&self) -> Option<Decimal> {
        self.entry_price.checked_sub(self.stop_price)
    }
}

/// How a fractional share count is rounded to a whole share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingRounding {
    /// Round half to even (13.5 -> 14, 12.5 -> 12).
    #[default]
    HalfEven,
    /// Round half away from zero (12.5 -> 13).
    HalfUp,
}

impl SizingRounding {
    /// The matching `rust_decimal` rounding strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

impl fmt::Display for SizingRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfEven => write!(f, "half_even"),
            Self::HalfUp => write!(f, "half_up"),
        }
    }
}

/// Result of a sizing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSizeResult {
    /// Shares bought on entry.
    pub total_shares: u64,
    /// Entry price minus stop price.
    pub risk_per_share: Decimal,
    /// Shares per exit tranche, first to last. Always sums to `total_shares`.
    pub tranches: [u64; TRANCHE_COUNT],
}

impl PositionSizeResult {
    /// Whether the sizing produced no shares at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares == 0
    }

    /// Dollars actually at risk after rounding to whole shares.
    #[must_use]
    pub fn dollar_risk(&self) -> Option<Decimal> {
        Decimal::from(self.total_shares).checked_mul(self.risk_per_share)
    }

    /// Profit target `multiple` R above `entry_price`.
    #[must_use]
    pub fn target_price(&self, entry_price: Decimal, multiple: Decimal) -> Option<Decimal> {
        multiple
            .checked_mul(self.risk_per_share)?
            .checked_add(entry_price)
    }
}

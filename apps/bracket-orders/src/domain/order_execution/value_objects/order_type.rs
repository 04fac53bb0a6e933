//! Order type (limit or stop).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order type specifying execution behavior.
///
/// Brackets only ever use resting orders: a stop to enter on the breakout and
/// to protect the position, a limit to take profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Limit order - execute at specified price or better.
    Limit,
    /// Stop order - becomes market order when stop price is reached.
    Stop,
}

impl OrderType {
    /// Returns true if the order's price is a limit price.
    #[must_use]
    pub const fn is_limit(&self) -> bool {
        matches!(self, Self::Limit)
    }

    /// Returns true if the order's price is a stop (trigger) price.
    #[must_use]
    pub const fn is_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "LIMIT"),
            Self::Stop => write!(f, "STOP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_type_price_kind() {
        assert!(OrderType::Limit.is_limit());
        assert!(!OrderType::Limit.is_stop());
        assert!(OrderType::Stop.is_stop());
        assert!(!OrderType::Stop.is_limit());
    }

    #[test]
    fn order_type_display() {
        assert_eq!(format!("{}", OrderType::Limit), "LIMIT");
        assert_eq!(format!("{}", OrderType::Stop), "STOP");
    }
}

//! Builds the bracket order graph from a sizing result.

use rust_decimal::Decimal;

use crate::domain::order_execution::{OrderSide, OrderType, Session, TimeInForce};
use crate::domain::shared::Symbol;
use crate::risk::sizing::{PositionSizeResult, SizingError};

use super::aggregate::{BracketOrder, EntryOrder, ExitLeg, OcoGroup};

/// Builds a `BracketOrder`: a stop entry that triggers one OCO group per
/// tranche, with profit targets at 1R, 2R and 3R above entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketOrderBuilder {
    entry_session: Session,
}

impl BracketOrderBuilder {
    /// Builder whose entry order works in `session`.
    #[must_use]
    pub const fn with_entry_session(entry_session: Session) -> Self {
        Self { entry_session }
    }

    /// Build the order graph.
    ///
    /// Each tranche `k` (1-based) exits at `entry_price + k * risk_per_share`
    /// or at `stop_price`, whichever fills first. Exit shares always sum to the
    /// entry share count.
    ///
    /// # Errors
    ///
    /// Returns `SizingError::PriceOverflow` if a profit target is out of
    /// `Decimal` range.
    pub fn build(
        &self,
        symbol: Symbol,
        size: &PositionSizeResult,
        entry_price: Decimal,
        stop_price: Decimal,
    ) -> Result<BracketOrder, SizingError> {
        let entry = EntryOrder {
            side: OrderSide::Buy,
            order_type: OrderType::Stop,
            shares: size.total_shares,
            trigger_price: entry_price,
            time_in_force: TimeInForce::Day,
            session: self.entry_session,
        };

        let group = |shares: u64, multiple: u32| {
            let target_price = size
                .target_price(entry_price, Decimal::from(multiple))
                .ok_or(SizingError::PriceOverflow {
                    entry_price,
                    stop_price,
                })?;
            Ok::<_, SizingError>(OcoGroup {
                target: ExitLeg::target(shares, target_price),
                protective_stop: ExitLeg::protective_stop(shares, stop_price),
            })
        };

        let [first, second, third] = size.tranches;
        let exits = [group(first, 1)?, group(second, 2)?, group(third, 3)?];

        Ok(BracketOrder {
            symbol,
            entry,
            exits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::sizing::{PositionSizer, RiskParameters};
    use rust_decimal_macros::dec;

    fn build(entry: Decimal, stop: Decimal, risk: Decimal) -> BracketOrder {
        let size = PositionSizer::default()
            .size(&RiskParameters::new(entry, stop, risk))
            .expect("valid parameters");
        BracketOrderBuilder::default()
            .build(Symbol::new("AMD"), &size, entry, stop)
            .expect("targets in range")
    }

    #[test]
    fn test_entry_is_buy_stop_for_total_shares() {
        let order = build(dec!(101.00), dec!(100.00), dec!(50));

        assert_eq!(order.entry.side, OrderSide::Buy);
        assert_eq!(order.entry.order_type, OrderType::Stop);
        assert_eq!(order.entry.shares, 50);
        assert_eq!(order.entry.trigger_price, dec!(101.00));
        assert_eq!(order.entry.time_in_force, TimeInForce::Day);
        assert_eq!(order.entry.session, Session::Normal);
    }

    #[test]
    fn test_targets_at_one_two_three_r() {
        let order = build(dec!(101.00), dec!(100.00), dec!(50));
        let targets = order.exit_targets();

        assert_eq!(targets[0].limit_price, dec!(102.00));
        assert_eq!(targets[1].limit_price, dec!(103.00));
        assert_eq!(targets[2].limit_price, dec!(104.00));
        assert!(targets.iter().all(|t| t.stop_price == dec!(100.00)));
        assert_eq!(targets.map(|t| t.shares), [16, 16, 18]);
    }

    #[test]
    fn test_opening_range_targets() {
        let order = build(dec!(148.86), dec!(145.26), dec!(50));
        let targets = order.exit_targets();

        assert_eq!(order.entry.shares, 14);
        assert_eq!(targets[0].limit_price, dec!(152.46));
        assert_eq!(targets[1].limit_price, dec!(156.06));
        assert_eq!(targets[2].limit_price, dec!(159.66));
        assert_eq!(targets.map(|t| t.shares), [4, 4, 6]);
    }

    #[test]
    fn test_exit_legs_are_gtc_sells() {
        let order = build(dec!(101.00), dec!(100.00), dec!(50));

        for group in &order.exits {
            assert_eq!(group.target.order_type, OrderType::Limit);
            assert_eq!(group.protective_stop.order_type, OrderType::Stop);
            for leg in group.legs() {
                assert_eq!(leg.side, OrderSide::Sell);
                assert_eq!(leg.time_in_force, TimeInForce::Gtc);
            }
            assert_eq!(group.target.shares, group.protective_stop.shares);
        }
    }

    #[test]
    fn test_exits_cover_whole_position() {
        let order = build(dec!(148.86), dec!(145.26), dec!(50));
        assert_eq!(order.covered_shares(), order.entry.shares);
        assert!(order.is_fully_covered());
    }

    #[test]
    fn test_zero_share_bracket_has_empty_tranches() {
        let order = build(dec!(101.00), dec!(100.00), Decimal::ZERO);

        assert!(order.is_empty());
        assert!(order.exits.iter().all(|group| group.shares() == 0));
        assert!(order.is_fully_covered());
    }

    #[test]
    fn test_entry_session_is_configurable() {
        let size = PositionSizer::default()
            .size(&RiskParameters::new(dec!(101), dec!(100), dec!(50)))
            .expect("valid parameters");
        let order = BracketOrderBuilder::with_entry_session(Session::Seamless)
            .build(Symbol::new("AMD"), &size, dec!(101), dec!(100))
            .expect("targets in range");

        assert_eq!(order.entry.session, Session::Seamless);
        assert!(order.exits.iter().all(|g| g.target.session == Session::Normal));
    }

    #[test]
    fn test_target_overflow_is_an_error() {
        let size = PositionSizeResult {
            total_shares: 0,
            risk_per_share: dec!(40000000000000000000000000000),
            tranches: [0, 0, 0],
        };

        let result = BracketOrderBuilder::default().build(
            Symbol::new("AMD"),
            &size,
            dec!(50000000000000000000000000000),
            dec!(10000000000000000000000000000),
        );
        assert!(matches!(result, Err(SizingError::PriceOverflow { .. })));
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build(dec!(148.86), dec!(145.26), dec!(50));
        let second = build(dec!(148.86), dec!(145.26), dec!(50));
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_summarizes_legs() {
        let order = build(dec!(101.00), dec!(100.00), dec!(50));
        let text = order.to_string();

        assert!(text.starts_with("BUY 50 AMD @ 101.00 STOP"));
        assert!(text.contains("T3: 18 @ 104.00 LMT / 100.00 STP"));
    }
}

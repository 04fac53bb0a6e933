//! The bracket order graph.
//!
//! Every type here is a plain value: built once by `BracketOrderBuilder`,
//! never mutated, compared structurally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::order_execution::{OrderSide, OrderType, Session, TimeInForce};
use crate::domain::shared::Symbol;
use crate::risk::sizing::TRANCHE_COUNT;

/// The conditional entry: a buy stop that fires on the breakout level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOrder {
    /// Always `Buy` for a long bracket.
    pub side: OrderSide,
    /// Always `Stop`.
    pub order_type: OrderType,
    /// Shares bought on fill.
    pub shares: u64,
    /// Stop price that triggers the entry.
    pub trigger_price: Decimal,
    /// Entry validity.
    pub time_in_force: TimeInForce,
    /// Session the entry works in.
    pub session: Session,
}

/// One sell leg of an exit group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitLeg {
    /// Always `Sell` for a long bracket.
    pub side: OrderSide,
    /// `Limit` for the profit target, `Stop` for the protective stop.
    pub order_type: OrderType,
    /// Shares sold by this leg.
    pub shares: u64,
    /// Limit price or stop price, depending on `order_type`.
    pub price: Decimal,
    /// Exit validity.
    pub time_in_force: TimeInForce,
    /// Session the exit works in.
    pub session: Session,
}

impl ExitLeg {
    /// Profit-target limit sell.
    #[must_use]
    pub const fn target(shares: u64, limit_price: Decimal) -> Self {
        Self {
            side: OrderSide::Sell,
            order_type: OrderType::Limit,
            shares,
            price: limit_price,
            time_in_force: TimeInForce::Gtc,
            session: Session::Normal,
        }
    }

    /// Protective stop sell.
    #[must_use]
    pub const fn protective_stop(shares: u64, stop_price: Decimal) -> Self {
        Self {
            side: OrderSide::Sell,
            order_type: OrderType::Stop,
            shares,
            price: stop_price,
            time_in_force: TimeInForce::Gtc,
            session: Session::Normal,
        }
    }
}

/// A target and a stop for the same tranche; a fill on one cancels the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcoGroup {
    /// Limit sell at the profit target.
    pub target: ExitLeg,
    /// Stop sell at the original stop-loss.
    pub protective_stop: ExitLeg,
}

impl OcoGroup {
    /// Shares this group closes out.
    ///
    /// Both legs carry the same count, and only one of them can fill.
    #[must_use]
    pub const fn shares(&self) -> u64 {
        self.target.shares
    }

    /// The two legs, target first.
    #[must_use]
    pub const fn legs(&self) -> [&ExitLeg; 2] {
        [&self.target, &self.protective_stop]
    }
}

/// Summary of one tranche's exit levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitTarget {
    /// Shares in the tranche.
    pub shares: u64,
    /// Profit-target limit price.
    pub limit_price: Decimal,
    /// Protective stop price.
    pub stop_price: Decimal,
}

/// A fully specified, unsubmitted bracket.
///
/// The entry triggers all exit groups once it fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketOrder {
    /// Instrument traded by every leg.
    pub symbol: Symbol,
    /// The triggering entry order.
    pub entry: EntryOrder,
    /// Exit groups ordered 1R, 2R, 3R.
    pub exits: [OcoGroup; TRANCHE_COUNT],
}

impl BracketOrder {
    /// Exit levels per tranche, in 1R, 2R, 3R order.
    #[must_use]
    pub fn exit_targets(&self) -> [ExitTarget; TRANCHE_COUNT] {
        self.exits.each_ref().map(|group| ExitTarget {
            shares: group.shares(),
            limit_price: group.target.price,
            stop_price: group.protective_stop.price,
        })
    }

    /// Shares closed out if every exit group completes.
    #[must_use]
    pub fn covered_shares(&self) -> u64 {
        self.exits.iter().map(OcoGroup::shares).sum()
    }

    /// Whether every share bought on entry is protected by an exit group.
    #[must_use]
    pub fn is_fully_covered(&self) -> bool {
        self.covered_shares() == self.entry.shares
    }

    /// Whether the bracket would trade zero shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entry.shares == 0
    }
}

impl fmt::Display for BracketOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {} STOP",
            self.entry.side, self.entry.shares, self.symbol, self.entry.trigger_price
        )?;
        for (index, group) in self.exits.iter().enumerate() {
            write!(
                f,
                " | T{}: {} @ {} LMT / {} STP",
                index + 1,
                group.shares(),
                group.target.price,
                group.protective_stop.price
            )?;
        }
        Ok(())
    }
}

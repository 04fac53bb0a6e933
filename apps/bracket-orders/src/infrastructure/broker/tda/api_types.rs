//! TDA API request and response types.
//!
//! These types map directly to the v1 REST JSON format.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::application::ports::DayRangeQuote;
use crate::domain::bracket_order::{BracketOrder, EntryOrder, ExitLeg, OcoGroup};
use crate::domain::order_execution::{OrderSide, OrderType, TimeInForce};
use crate::domain::shared::Symbol;

use super::error::TdaError;

// ============================================================================
// Order Request Types
// ============================================================================

/// Order strategy node.
///
/// Leaf orders are `SINGLE`; an `OCO` node only groups its children; a
/// `TRIGGER` order activates its children once filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdaOrderRequest {
    /// Order type (`LIMIT`, `STOP`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// Session (`NORMAL`, `AM`, `PM`, `SEAMLESS`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    /// Duration (`DAY`, `GOOD_TILL_CANCEL`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Stop trigger price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    /// Strategy type (`SINGLE`, `OCO`, `TRIGGER`).
    pub order_strategy_type: String,
    /// Legs of this order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_leg_collection: Vec<TdaOrderLeg>,
    /// Orders activated or grouped by this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_order_strategies: Vec<TdaOrderRequest>,
}

/// One leg of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdaOrderLeg {
    /// `BUY` or `SELL`.
    pub instruction: String,
    /// Share count.
    pub quantity: u64,
    /// Instrument traded.
    pub instrument: TdaInstrument,
}

/// Instrument reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdaInstrument {
    /// Ticker.
    pub symbol: String,
    /// Always `EQUITY` here.
    pub asset_type: String,
}

impl TdaOrderRequest {
    fn equity_leg(symbol: &Symbol, side: OrderSide, shares: u64) -> TdaOrderLeg {
        TdaOrderLeg {
            instruction: instruction(side).to_string(),
            quantity: shares,
            instrument: TdaInstrument {
                symbol: symbol.as_str().to_string(),
                asset_type: "EQUITY".to_string(),
            },
        }
    }

    fn entry(symbol: &Symbol, entry: &EntryOrder) -> Self {
        let (price, stop_price) = price_fields(entry.order_type, entry.trigger_price);
        Self {
            order_type: Some(order_type(entry.order_type).to_string()),
            session: Some(entry.session.to_string()),
            duration: Some(duration(entry.time_in_force).to_string()),
            price,
            stop_price,
            order_strategy_type: "TRIGGER".to_string(),
            order_leg_collection: vec![Self::equity_leg(symbol, entry.side, entry.shares)],
            child_order_strategies: Vec::new(),
        }
    }

    fn exit(symbol: &Symbol, leg: &ExitLeg) -> Self {
        let (price, stop_price) = price_fields(leg.order_type, leg.price);
        Self {
            order_type: Some(order_type(leg.order_type).to_string()),
            session: Some(leg.session.to_string()),
            duration: Some(duration(leg.time_in_force).to_string()),
            price,
            stop_price,
            order_strategy_type: "SINGLE".to_string(),
            order_leg_collection: vec![Self::equity_leg(symbol, leg.side, leg.shares)],
            child_order_strategies: Vec::new(),
        }
    }

    fn one_cancels_other(symbol: &Symbol, group: &OcoGroup) -> Self {
        Self {
            order_type: None,
            session: None,
            duration: None,
            price: None,
            stop_price: None,
            order_strategy_type: "OCO".to_string(),
            order_leg_collection: Vec::new(),
            child_order_strategies: group
                .legs()
                .into_iter()
                .map(|leg| Self::exit(symbol, leg))
                .collect(),
        }
    }
}

impl From<&BracketOrder> for TdaOrderRequest {
    fn from(order: &BracketOrder) -> Self {
        let mut request = Self::entry(&order.symbol, &order.entry);
        request.child_order_strategies = order
            .exits
            .iter()
            .map(|group| Self::one_cancels_other(&order.symbol, group))
            .collect();
        request
    }
}

const fn instruction(side: OrderSide) -> &'static str {
    match side {
        OrderSide::Buy => "BUY",
        OrderSide::Sell => "SELL",
    }
}

const fn order_type(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::Limit => "LIMIT",
        OrderType::Stop => "STOP",
    }
}

const fn duration(time_in_force: TimeInForce) -> &'static str {
    match time_in_force {
        TimeInForce::Day => "DAY",
        TimeInForce::Gtc => "GOOD_TILL_CANCEL",
    }
}

/// `(price, stopPrice)` for a leg. Stop triggers go out exactly as sized.
fn price_fields(order_type: OrderType, price: Decimal) -> (Option<String>, Option<String>) {
    let limit = order_type.is_limit().then(|| format_price(price));
    let stop = order_type.is_stop().then(|| price.to_string());
    (limit, stop)
}

/// Format a limit price the way the order API expects it.
///
/// Truncates toward zero: to four decimals below one dollar, two otherwise.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    if !price.is_zero() && price.abs() < Decimal::ONE {
        format!("{:.4}", price.round_dp_with_strategy(4, RoundingStrategy::ToZero))
    } else {
        format!("{:.2}", price.round_dp_with_strategy(2, RoundingStrategy::ToZero))
    }
}

// ============================================================================
// Quote Response Types
// ============================================================================

/// Quote response: one entry per requested symbol.
pub type TdaQuoteResponse = HashMap<String, TdaQuote>;

/// Quote fields used for breakout levels.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdaQuote {
    /// Session high.
    #[serde(default)]
    pub high_price: Option<Decimal>,
    /// Session low.
    #[serde(default)]
    pub low_price: Option<Decimal>,
    /// Last trade.
    #[serde(default)]
    pub last_price: Option<Decimal>,
    /// Quote time, milliseconds since the epoch.
    #[serde(default)]
    pub quote_time_in_long: Option<i64>,
}

impl TdaQuote {
    /// Convert to the port's quote type.
    pub fn to_day_range(&self, symbol: &Symbol) -> Result<DayRangeQuote, TdaError> {
        let missing = |field| TdaError::MissingQuoteField {
            symbol: symbol.to_string(),
            field,
        };

        let high_price = self.high_price.ok_or_else(|| missing("highPrice"))?;
        let low_price = self.low_price.ok_or_else(|| missing("lowPrice"))?;

        Ok(DayRangeQuote {
            symbol: symbol.clone(),
            high_price,
            low_price,
            last_price: self.last_price,
            quote_time: self
                .quote_time_in_long
                .and_then(DateTime::<Utc>::from_timestamp_millis),
        })
    }
}

/// Pick the symbol's entry out of a quote response.
pub fn quote_for(response: &TdaQuoteResponse, symbol: &Symbol) -> Result<DayRangeQuote, TdaError> {
    response
        .get(symbol.as_str())
        .ok_or_else(|| TdaError::SymbolNotFound(symbol.to_string()))?
        .to_day_range(symbol)
}

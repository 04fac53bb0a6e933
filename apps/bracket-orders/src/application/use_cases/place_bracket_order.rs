//! Place Bracket Order Use Case
//!
//! Resolve entry levels → size → build → [submit], once per invocation.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::{OrderConfirmation, OrderSubmissionPort, QuotePort};
use crate::domain::bracket_order::{BracketOrder, BracketOrderBuilder};
use crate::domain::shared::Symbol;
use crate::error::BracketError;
use crate::risk::sizing::{PositionSizeResult, PositionSizer, RiskParameters};

/// Where the entry and stop prices come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySource {
    /// Prices supplied by the operator.
    Fixed {
        /// Breakout trigger for the buy stop.
        entry_price: Decimal,
        /// Protective stop for every tranche.
        stop_price: Decimal,
    },
    /// Entry at the session high, stop at the session low.
    OpeningRangeBreakout,
}

/// Input for one placement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceBracketOrderRequest {
    /// Instrument to trade.
    pub symbol: Symbol,
    /// Dollars lost if every tranche is stopped out.
    pub max_risk_amount: Decimal,
    /// Source of entry and stop prices.
    pub entry: EntrySource,
    /// Brokerage account receiving the order.
    pub account_id: String,
    /// Whether to send the order; when false the run only builds it.
    pub submit: bool,
}

/// What happened to the built order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// Order built but not sent.
    DryRun,
    /// Order accepted by the broker.
    Submitted(OrderConfirmation),
}

/// Result of a placement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Sizing that produced the order.
    pub size: PositionSizeResult,
    /// The order graph.
    pub order: BracketOrder,
    /// Submission outcome.
    pub outcome: PlacementOutcome,
}

/// Use case for sizing, building and optionally submitting a bracket order.
pub struct PlaceBracketOrderUseCase<Q, S>
where
    Q: QuotePort,
    S: OrderSubmissionPort,
{
    quotes: Arc<Q>,
    broker: Arc<S>,
    sizer: PositionSizer,
    builder: BracketOrderBuilder,
}

impl<Q, S> PlaceBracketOrderUseCase<Q, S>
where
    Q: QuotePort,
    S: OrderSubmissionPort,
{
    /// Create a new PlaceBracketOrderUseCase with default sizing and building.
    pub fn new(quotes: Arc<Q>, broker: Arc<S>) -> Self {
        Self {
            quotes,
            broker,
            sizer: PositionSizer::default(),
            builder: BracketOrderBuilder::default(),
        }
    }

    /// Replace the position sizer.
    #[must_use]
    pub const fn with_sizer(mut self, sizer: PositionSizer) -> Self {
        self.sizer = sizer;
        self
    }

    /// Replace the order builder.
    #[must_use]
    pub const fn with_builder(mut self, builder: BracketOrderBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Execute the use case.
    ///
    /// Nothing leaves the process unless `request.submit` is set; a dry run
    /// with identical input always yields an identical report.
    pub async fn execute(
        &self,
        request: &PlaceBracketOrderRequest,
    ) -> Result<PlacementReport, BracketError> {
        request.symbol.validate()?;

        // 1. Entry and stop levels
        let (entry_price, stop_price) = self.resolve_levels(request).await?;

        // 2. Size
        let params = RiskParameters::new(entry_price, stop_price, request.max_risk_amount);
        let size = self.sizer.size(&params)?;

        tracing::info!(
            symbol = %request.symbol,
            entry_price = %entry_price,
            stop_price = %stop_price,
            risk_per_share = %size.risk_per_share,
            total_shares = size.total_shares,
            dollar_risk = ?size.dollar_risk(),
            tranches = ?size.tranches,
            rounding = %self.sizer.rounding(),
            "Position sized"
        );

        // 3. Build
        let order = self
            .builder
            .build(request.symbol.clone(), &size, entry_price, stop_price)?;

        tracing::info!(order = %order, "Bracket order built");

        if !request.submit {
            tracing::info!(
                symbol = %request.symbol,
                "Submission disabled, order not sent"
            );
            return Ok(PlacementReport {
                size,
                order,
                outcome: PlacementOutcome::DryRun,
            });
        }

        // 4. Submit
        if order.is_empty() {
            return Err(BracketError::EmptyPosition {
                symbol: request.symbol.to_string(),
            });
        }

        tracing::warn!(
            account_id = %request.account_id,
            symbol = %request.symbol,
            shares = order.entry.shares,
            "Submitting bracket order - this will place real orders"
        );

        let confirmation = self
            .broker
            .submit_order(&request.account_id, &order)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Order submission failed"))?;

        tracing::info!(
            order_id = ?confirmation.order_id,
            status = confirmation.status_code,
            "Bracket order accepted"
        );

        Ok(PlacementReport {
            size,
            order,
            outcome: PlacementOutcome::Submitted(confirmation),
        })
    }

    async fn resolve_levels(
        &self,
        request: &PlaceBracketOrderRequest,
    ) -> Result<(Decimal, Decimal), BracketError> {
        match request.entry {
            EntrySource::Fixed {
                entry_price,
                stop_price,
            } => Ok((entry_price, stop_price)),
            EntrySource::OpeningRangeBreakout => {
                let quote = self.quotes.get_quote(&request.symbol).await?;

                tracing::info!(
                    symbol = %quote.symbol,
                    high_price = %quote.high_price,
                    low_price = %quote.low_price,
                    last_price = ?quote.last_price,
                    quote_time = ?quote.quote_time,
                    "Quote received"
                );

                quote.breakout_levels().map_err(|e| {
                    tracing::error!(error = %e, "High is below low, aborting");
                    BracketError::from(e)
                })
            }
        }
    }
}

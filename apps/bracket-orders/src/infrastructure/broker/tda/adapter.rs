//! TDA broker adapter implementing `QuotePort` and `OrderSubmissionPort`.

use async_trait::async_trait;

use crate::application::ports::{
    DayRangeQuote, OrderConfirmation, OrderSubmissionPort, QuoteError, QuotePort, SubmissionError,
};
use crate::domain::bracket_order::BracketOrder;
use crate::domain::shared::Symbol;

use super::api_types::{TdaOrderRequest, quote_for};
use super::config::TdaConfig;
use super::error::TdaError;
use super::http_client::TdaHttpClient;

/// TD Ameritrade-style REST broker adapter.
#[derive(Debug, Clone)]
pub struct TdaBrokerAdapter {
    client: TdaHttpClient,
}

impl TdaBrokerAdapter {
    /// Create a new adapter.
    ///
    /// The token file is read per request, so a missing token only fails the
    /// calls that need it.
    pub fn new(config: &TdaConfig) -> Result<Self, TdaError> {
        Ok(Self {
            client: TdaHttpClient::new(config)?,
        })
    }
}

#[async_trait]
impl QuotePort for TdaBrokerAdapter {
    async fn get_quote(&self, symbol: &Symbol) -> Result<DayRangeQuote, QuoteError> {
        tracing::info!(symbol = %symbol, "Requesting quote");

        let response = self
            .client
            .get_quotes(symbol.as_str())
            .await
            .map_err(QuoteError::from)?;

        quote_for(&response, symbol).map_err(QuoteError::from)
    }
}

#[async_trait]
impl OrderSubmissionPort for TdaBrokerAdapter {
    async fn submit_order(
        &self,
        account_id: &str,
        order: &BracketOrder,
    ) -> Result<OrderConfirmation, SubmissionError> {
        let request = TdaOrderRequest::from(order);

        tracing::info!(
            account_id = %account_id,
            symbol = %order.symbol,
            shares = order.entry.shares,
            strategy = %request.order_strategy_type,
            stop_price = ?request.stop_price,
            children = request.child_order_strategies.len(),
            "Submitting order to TDA"
        );

        let placed = self
            .client
            .place_order(account_id, &request)
            .await
            .map_err(SubmissionError::from)?;

        tracing::info!(
            order_id = ?placed.order_id,
            status = placed.status,
            "Order accepted by TDA"
        );

        Ok(OrderConfirmation {
            order_id: placed.order_id,
            status_code: placed.status,
        })
    }
}

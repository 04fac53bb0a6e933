//! Order Submission Port (Driven Port)
//!
//! Interface for handing a built bracket to the broker.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::bracket_order::BracketOrder;

/// Broker acknowledgment of a submitted bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Broker-assigned order ID, when the broker reports one.
    pub order_id: Option<String>,
    /// HTTP status returned by the broker.
    pub status_code: u16,
}

/// Submission error.
///
/// Submission is attempted once; every variant is fatal for the run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionError {
    /// Broker answered with a non-success status.
    #[error("Order rejected by broker (HTTP {status}): {payload}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw error payload from the broker.
        payload: String,
    },

    /// Credentials were missing or refused.
    #[error("Broker authorization failed: {message}")]
    Unauthorized {
        /// Error details.
        message: String,
    },

    /// The request never produced a broker response.
    #[error("Broker transport error: {message}")]
    Transport {
        /// Error details.
        message: String,
    },
}

/// Port for order submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderSubmissionPort: Send + Sync {
    /// Submit a bracket order to the given account.
    async fn submit_order(
        &self,
        account_id: &str,
        order: &BracketOrder,
    ) -> Result<OrderConfirmation, SubmissionError>;
}

//! TD Ameritrade-style REST Broker Adapter
//!
//! Implements `QuotePort` and `OrderSubmissionPort` over the v1 REST API:
//! - Quote lookup with day high/low
//! - Trigger/OCO order graph submission
//! - Pre-issued bearer token read from a token file (no refresh)
//!
//! Every call is a single request. Failures are reported, never retried.

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;
mod token;

pub use adapter::TdaBrokerAdapter;
pub use api_types::{TdaInstrument, TdaOrderLeg, TdaOrderRequest, format_price};
pub use config::TdaConfig;
pub use error::TdaError;
pub use token::read_access_token;

//! Broker Adapters
//!
//! Implementations of `QuotePort` and `OrderSubmissionPort`.

pub mod tda;

pub use tda::{TdaBrokerAdapter, TdaConfig, TdaError};

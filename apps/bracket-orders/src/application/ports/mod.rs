//! Application Ports (Driven)
//!
//! Ports define how the application reaches external systems. Adapters in
//! `infrastructure` implement them; tests substitute fakes.

mod order_submission_port;
mod quote_port;

pub use order_submission_port::{OrderConfirmation, OrderSubmissionPort, SubmissionError};
pub use quote_port::{DayRangeQuote, QuoteError, QuotePort};

#[cfg(test)]
pub use order_submission_port::MockOrderSubmissionPort;
#[cfg(test)]
pub use quote_port::MockQuotePort;

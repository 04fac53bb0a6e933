//! Infrastructure Layer
//!
//! Driven adapters implementing the application ports:
//!
//! - `broker/`: Broker REST adapters (quotes and order routing)

pub mod broker;

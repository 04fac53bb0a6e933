//! Order Execution Bounded Context
//!
//! Order-level vocabulary shared by the entry and exit legs of a bracket.

pub mod value_objects;

pub use value_objects::{OrderSide, OrderType, Session, TimeInForce};

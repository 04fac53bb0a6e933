//! Domain layer - core business logic with no external dependencies.
//!
//! - `bracket_order`: the entry + three OCO exit groups order graph
//! - `order_execution`: side, type, duration and session vocabulary
//! - `shared`: value objects used across contexts

pub mod bracket_order;
pub mod order_execution;
pub mod shared;

//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.

mod symbol;

pub use symbol::Symbol;

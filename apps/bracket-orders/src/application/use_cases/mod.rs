//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod place_bracket_order;

pub use place_bracket_order::{
    EntrySource, PlaceBracketOrderRequest, PlaceBracketOrderUseCase, PlacementOutcome,
    PlacementReport,
};

//! Bracket Order Bounded Context
//!
//! A bracket is one conditional entry order whose fill activates three
//! independent one-cancels-other (OCO) exit groups. Each group pairs a
//! profit-target limit sell with a protective stop sell for one tranche of the
//! position.
//!
//! - `aggregate`: the immutable order graph (`BracketOrder`, `OcoGroup`, legs)
//! - `builder`: turns a sizing result into a `BracketOrder`

pub mod aggregate;
pub mod builder;

pub use aggregate::{BracketOrder, EntryOrder, ExitLeg, ExitTarget, OcoGroup};
pub use builder::BracketOrderBuilder;

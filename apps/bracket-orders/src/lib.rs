// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Bracket Orders - Rust Core Library
//!
//! Risk-sized bracket orders: a buy stop entry that, once filled, activates
//! three one-cancels-other exit pairs with profit targets at 1R, 2R and 3R
//! and a shared protective stop.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Order graph and vocabulary
//!   - `bracket_order`: `BracketOrder` aggregate and `BracketOrderBuilder`
//!   - `order_execution`: side, type, session, time in force
//!   - `shared`: `Symbol`, domain errors
//!
//! - **Risk**: `PositionSizer` turns a dollar budget into shares and tranches
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `QuotePort`, `OrderSubmissionPort`
//!   - `use_cases`: `PlaceBracketOrderUseCase`
//!
//! - **Infrastructure**: Adapters
//!   - `broker::tda`: TD Ameritrade-style REST adapter for both ports
//!
//! Configuration, error classification and logging setup live in `config`,
//! `error` and `telemetry`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Risk calculations - position sizing.
pub mod risk;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration loading and validation.
pub mod config;

/// Run-level error classification and exit codes.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::bracket_order::{
    BracketOrder, BracketOrderBuilder, EntryOrder, ExitLeg, ExitTarget, OcoGroup,
};
pub use domain::order_execution::{OrderSide, OrderType, Session, TimeInForce};
pub use domain::shared::{DomainError, Symbol};

// Risk re-exports
pub use risk::sizing::{
    PositionSizeResult, PositionSizer, PositionSizerConfig, RiskParameters, SizingError,
    SizingRounding,
};

// Application re-exports
pub use application::ports::{
    DayRangeQuote, OrderConfirmation, OrderSubmissionPort, QuoteError, QuotePort, SubmissionError,
};
pub use application::use_cases::{
    EntrySource, PlaceBracketOrderRequest, PlaceBracketOrderUseCase, PlacementOutcome,
    PlacementReport,
};

// Infrastructure re-exports
pub use infrastructure::broker::tda::{TdaBrokerAdapter, TdaConfig, TdaError};

pub use error::{BracketError, ErrorCode};

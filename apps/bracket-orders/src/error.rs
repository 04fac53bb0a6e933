//! Error handling for a bracket placement run.
//!
//! Every error is terminal for the invocation. Each maps to an `ErrorCode`
//! carrying a stable reason string (for logs) and a process exit code.
//!
//! | Exit | Meaning |
//! |------|---------|
//! | 0 | Order built (and submitted, when enabled) |
//! | 1 | Any failure not listed below |
//! | 2 | Quote high below quote low |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::{QuoteError, SubmissionError};
use crate::config::ConfigError;
use crate::domain::shared::DomainError;
use crate::infrastructure::broker::tda::TdaError;
use crate::risk::sizing::SizingError;

/// Exit code for a quote whose high is below its low.
pub const EXIT_INVERTED_QUOTE: u8 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Error codes for a placement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Entry not above stop, or negative risk budget.
    InvalidRiskConfiguration,
    /// Quote high below quote low.
    QuoteDataError,
    /// Quote could not be fetched or parsed.
    QuoteUnavailable,
    /// Broker refused or never answered the submission.
    SubmissionError,
    /// Sizing produced zero shares and submission was requested.
    EmptyPosition,
    /// Symbol failed validation.
    InvalidSymbol,
    /// Configuration could not be loaded.
    InvalidConfiguration,
    /// Broker adapter could not be constructed.
    BrokerSetup,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRiskConfiguration => "INVALID_RISK_CONFIGURATION",
            Self::QuoteDataError => "QUOTE_DATA_ERROR",
            Self::QuoteUnavailable => "QUOTE_UNAVAILABLE",
            Self::SubmissionError => "SUBMISSION_ERROR",
            Self::EmptyPosition => "EMPTY_POSITION",
            Self::InvalidSymbol => "INVALID_SYMBOL",
            Self::InvalidConfiguration => "INVALID_CONFIGURATION",
            Self::BrokerSetup => "BROKER_SETUP",
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::QuoteDataError => EXIT_INVERTED_QUOTE,
            _ => EXIT_FAILURE,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Any failure of a placement run.
#[derive(Debug, Error)]
pub enum BracketError {
    /// Sizing rejected the entry/stop/risk combination.
    #[error(transparent)]
    Sizing(#[from] SizingError),

    /// Quote lookup failed or returned an inverted range.
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Broker submission failed.
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// Submission requested for a bracket with no shares.
    #[error("Refusing to submit a zero-share bracket for {symbol}")]
    EmptyPosition {
        /// Symbol of the empty bracket.
        symbol: String,
    },

    /// Symbol failed validation.
    #[error(transparent)]
    InvalidSymbol(#[from] DomainError),

    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Broker adapter could not be constructed.
    #[error(transparent)]
    Broker(#[from] TdaError),
}

impl BracketError {
    /// Classify this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Sizing(_) => ErrorCode::InvalidRiskConfiguration,
            Self::Quote(QuoteError::InvertedRange { .. }) => ErrorCode::QuoteDataError,
            Self::Quote(_) => ErrorCode::QuoteUnavailable,
            Self::Submission(_) => ErrorCode::SubmissionError,
            Self::EmptyPosition { .. } => ErrorCode::EmptyPosition,
            Self::InvalidSymbol(_) => ErrorCode::InvalidSymbol,
            Self::Config(_) => ErrorCode::InvalidConfiguration,
            Self::Broker(_) => ErrorCode::BrokerSetup,
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code().exit_code()
    }
}

//! TDA-specific error types.

use thiserror::Error;

use crate::application::ports::{QuoteError, SubmissionError};

/// Errors from the TDA adapter.
#[derive(Debug, Error, Clone)]
pub enum TdaError {
    /// Adapter configuration is unusable.
    #[error("Invalid broker configuration: {0}")]
    InvalidConfig(String),

    /// Token file missing, unreadable, or without an access token.
    #[error("Token file '{path}': {message}")]
    Token {
        /// Token file path.
        path: String,
        /// Error details.
        message: String,
    },

    /// Network error; no response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Access token refused (401/403).
    #[error("Authentication failed (HTTP {status}): {payload}")]
    AuthenticationFailed {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        payload: String,
    },

    /// Order endpoint answered with anything but 200/201.
    #[error("Order rejected (HTTP {status}): {payload}")]
    OrderRejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        payload: String,
    },

    /// Quote endpoint answered with a non-success status.
    #[error("Quote request failed (HTTP {status}): {payload}")]
    QuoteRequestFailed {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        payload: String,
    },

    /// Quote response had no entry for the symbol.
    #[error("Symbol not found in quote response: {0}")]
    SymbolNotFound(String),

    /// Quote entry lacked a required field.
    #[error("Quote for {symbol} is missing {field}")]
    MissingQuoteField {
        /// Symbol quoted.
        symbol: String,
        /// Missing JSON field.
        field: &'static str,
    },

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<TdaError> for QuoteError {
    fn from(err: TdaError) -> Self {
        match err {
            TdaError::SymbolNotFound(symbol) => Self::SymbolNotFound { symbol },
            TdaError::MissingQuoteField { .. } | TdaError::JsonParse(_) => Self::Malformed {
                message: err.to_string(),
            },
            TdaError::InvalidConfig(_)
            | TdaError::Token { .. }
            | TdaError::Network(_)
            | TdaError::AuthenticationFailed { .. }
            | TdaError::OrderRejected { .. }
            | TdaError::QuoteRequestFailed { .. } => Self::Unavailable {
                message: err.to_string(),
            },
        }
    }
}

impl From<TdaError> for SubmissionError {
    fn from(err: TdaError) -> Self {
        match err {
            TdaError::OrderRejected { status, payload } => Self::Rejected { status, payload },
            TdaError::AuthenticationFailed { .. } | TdaError::Token { .. } => Self::Unauthorized {
                message: err.to_string(),
            },
            TdaError::InvalidConfig(_)
            | TdaError::Network(_)
            | TdaError::QuoteRequestFailed { .. }
            | TdaError::SymbolNotFound(_)
            | TdaError::MissingQuoteField { .. }
            | TdaError::JsonParse(_) => Self::Transport {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tda_error_to_submission_error_rejected() {
        let err = TdaError::OrderRejected {
            status: 400,
            payload: "{\"error\":\"bad order\"}".to_string(),
        };
        let submission_err: SubmissionError = err.into();
        assert!(matches!(
            submission_err,
            SubmissionError::Rejected { status: 400, ref payload } if payload.contains("bad order")
        ));
    }

    #[test]
    fn tda_error_to_submission_error_auth() {
        let err = TdaError::AuthenticationFailed {
            status: 401,
            payload: String::new(),
        };
        let submission_err: SubmissionError = err.into();
        assert!(matches!(submission_err, SubmissionError::Unauthorized { .. }));
    }

    #[test]
    fn tda_error_to_submission_error_network() {
        let err = TdaError::Network("connection refused".to_string());
        let submission_err: SubmissionError = err.into();
        assert!(matches!(submission_err, SubmissionError::Transport { .. }));
    }

    #[test]
    fn tda_error_to_quote_error_not_found() {
        let err = TdaError::SymbolNotFound("ZZZZ".to_string());
        let quote_err: QuoteError = err.into();
        assert!(matches!(quote_err, QuoteError::SymbolNotFound { .. }));
    }

    #[test]
    fn tda_error_to_quote_error_missing_field() {
        let err = TdaError::MissingQuoteField {
            symbol: "AAPL".to_string(),
            field: "highPrice",
        };
        let quote_err: QuoteError = err.into();
        assert!(matches!(quote_err, QuoteError::Malformed { .. }));
    }

    #[test]
    fn tda_error_to_quote_error_http() {
        let err = TdaError::QuoteRequestFailed {
            status: 503,
            payload: String::new(),
        };
        let quote_err: QuoteError = err.into();
        assert!(matches!(quote_err, QuoteError::Unavailable { .. }));
    }
}

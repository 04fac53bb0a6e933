//! Symbol value object for equity tickers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Longest ticker the broker accepts for an equity leg.
const MAX_SYMBOL_LEN: usize = 12;

/// An equity trading symbol ("AMD", "AAPL", "BRK.B").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed and normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate the symbol for order submission.
    ///
    /// # Errors
    ///
    /// Returns error if symbol is empty, too long, or contains characters
    /// other than ASCII letters, digits, `.` and `/`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol cannot be empty".to_string(),
            });
        }

        if self.0.len() > MAX_SYMBOL_LEN {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol exceeds maximum length".to_string(),
            });
        }

        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '/')
        {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol contains invalid characters".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

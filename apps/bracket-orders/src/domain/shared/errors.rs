//! Domain errors shared across bounded contexts.

/// Domain-level errors that can occur in business logic.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Invalid value for a field.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

//! Error types for sequence queries.
//!
//! Every failure is surfaced to the immediate caller. No operator catches or
//! retries another operator's error; pipelines fail fast.

use thiserror::Error;

/// Errors raised while constructing or evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A required sequence, selector, predicate, comparer or equality argument was absent.
    ///
    /// Raised when the operator is constructed, never during iteration.
    #[error("{operator}: required argument '{argument}' is missing")]
    InvalidArgument {
        operator: &'static str,
        argument: &'static str,
    },

    /// A keyed collection saw the same key twice, or a key that was absent.
    #[error("{operator}: duplicate or missing key {key}")]
    DuplicateKey { operator: &'static str, key: String },

    /// A first-match lookup exhausted its source.
    #[error("{operator}: no element matched the predicate")]
    NotFound { operator: &'static str },
}

impl QueryError {
    pub(crate) fn invalid_argument(operator: &'static str, argument: &'static str) -> Self {
        tracing::debug!(operator, argument, "rejecting operator with missing argument");
        QueryError::InvalidArgument { operator, argument }
    }

    pub(crate) fn duplicate_key(operator: &'static str, key: String) -> Self {
        tracing::debug!(operator, %key, "duplicate key");
        QueryError::DuplicateKey { operator, key }
    }

    pub(crate) fn not_found(operator: &'static str) -> Self {
        tracing::debug!(operator, "source exhausted without a match");
        QueryError::NotFound { operator }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Unwraps a required argument, or fails with [`QueryError::InvalidArgument`].
pub(crate) fn required<T>(
    value: Option<T>,
    operator: &'static str,
    argument: &'static str,
) -> Result<T> {
    value.ok_or_else(|| QueryError::invalid_argument(operator, argument))
}

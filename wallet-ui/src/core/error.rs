//! # Common Error Types
//!
//! Consolidated error handling for the wallet frontend.
//!
//! Errors are categorized by where they come from:
//!
//! - **Backend**: the remote call bridge rejected a command; the message is
//!   the backend's raw error string.
//! - **Precondition**: a hook was invoked without something it needs from
//!   local context (e.g. listing accounts with no wallet id in the route).
//!   Fails fast, no network round trip, distinct from a backend error so the
//!   UI can tell "you navigated here wrongly" from "the backend is
//!   unreachable".
//! - **Validation**: field-scoped form input failure; handled at the form
//!   boundary and never surfaced through the query cache.
//!
//! None of these are fatal; the application stays interactive after any
//! single failure.

use thiserror::Error;

use crate::query::QueryError;
use crate::utils::validation::FieldError;

/// Application-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The backend rejected a remote call.
    #[error("backend error: {0}")]
    Backend(String),

    /// A local precondition failed before any remote call was made.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Form input failed a local validation check.
    #[error("validation error: {0}")]
    Validation(#[from] FieldError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Backend(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Backend(msg.to_string())
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Backend(msg) => AppError::Backend(msg),
            QueryError::Precondition(msg) => AppError::Precondition(msg),
        }
    }
}

impl From<AppError> for QueryError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Backend(msg) => QueryError::Backend(msg),
            AppError::Precondition(msg) => QueryError::Precondition(msg),
            // validation is caught at the form boundary; if one leaks into a
            // loader it behaves like a missing precondition
            AppError::Validation(field) => QueryError::Precondition(field.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Field;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Backend("wallet not found".to_string()).to_string(),
            "backend error: wallet not found"
        );
        assert_eq!(
            AppError::Precondition("missing wallet id".to_string()).to_string(),
            "precondition failed: missing wallet id"
        );
        let err: AppError = FieldError::new(Field::Password, "The password is required").into();
        assert_eq!(
            err.to_string(),
            "validation error: password: The password is required"
        );
    }

    #[test]
    fn test_query_error_conversion() {
        let err: AppError = QueryError::Precondition("no wallet id".to_string()).into();
        assert_eq!(err, AppError::Precondition("no wallet id".to_string()));
    }
}

//! # Common Error Types
//!
//! Consolidated error handling for the client application.
//!
//! Errors are categorized by their source:
//!
//! - **Auth**: Authentication failures (bad credentials, missing or rejected session)
//! - **Http**: Normalized backend/transport failures (network, non-2xx, JSON parsing)
//! - **Validation**: Client-side input validation failures, shown inline
//! - **State**: Application state management failures
//!
//! Services normalize every backend and transport failure into `Http` (or
//! `Auth` for a 401) before it reaches the data-fetching layer, so callers
//! never see raw transport errors. All failures are recoverable at the UI
//! level; none are process-fatal.

use thiserror::Error;

/// Application-wide error type. Each variant carries a human-readable message
/// that the UI can render directly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Bad credentials, or a session the backend no longer accepts.
    #[error("auth error: {0}")]
    Auth(String),

    /// Backend API communication error: network failures, non-2xx responses,
    /// malformed response bodies. Carries the message extracted from the
    /// backend's error body when one was present.
    #[error("request error: {0}")]
    Http(String),

    /// Client-side input validation failure (required field missing, bad format).
    #[error("validation error: {0}")]
    Validation(String),

    /// Application state management error.
    #[error("state error: {0}")]
    State(String),
}

impl AppError {
    /// Whether this error means the session is no longer valid.
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth(_))
    }

    /// The message without the category prefix, for inline display.
    pub fn message(&self) -> &str {
        match self {
            AppError::Auth(msg)
            | AppError::Http(msg)
            | AppError::Validation(msg)
            | AppError::State(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_category() {
        let err = AppError::Auth("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "auth error: Invalid credentials");
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn test_is_auth() {
        assert!(AppError::Auth("x".to_string()).is_auth());
        assert!(!AppError::Http("x".to_string()).is_auth());
        assert!(!AppError::Validation("x".to_string()).is_auth());
    }
}

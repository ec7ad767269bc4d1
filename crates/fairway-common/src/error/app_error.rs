//! Application error types
//!
//! Unified error handling for authentication and infrastructure concerns
//! that sit outside the domain layer.

use fairway_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors. Both bad-username and bad-password collapse
    // into the same message so usernames cannot be enumerated.
    #[error("Incorrect username and/or password. Please try again")]
    InvalidCredentials,

    #[error("Incorrect token. Please try again")]
    InvalidToken,

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::InvalidToken => 401,
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_conflict() || e.is_validation() {
                    400
                } else {
                    500
                }
            }
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => 500,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

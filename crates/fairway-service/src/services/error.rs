//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use fairway_common::AppError;
use fairway_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or missing resource
    Domain(DomainError),

    /// Application error (authentication, infrastructure)
    App(AppError),

    /// Required fields absent from a request body
    MissingFields(Vec<&'static str>),

    /// Authenticated but not permitted to act on the resource
    Forbidden(&'static str),

    /// A comment addressed through the wrong teetime URL
    CommentMismatch { comment_id: i64, teetime_id: i64 },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::MissingFields(fields) => {
                write!(f, "{} must be in the request body", fields.join(", "))
            }
            Self::Forbidden(msg) => write!(f, "{msg}"),
            Self::CommentMismatch {
                comment_id,
                teetime_id,
            } => write!(
                f,
                "Comment #{comment_id} is not associated with tee time #{teetime_id}"
            ),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a forbidden error with the message shown to the caller
    pub fn forbidden(msg: &'static str) -> Self {
        Self::Forbidden(msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_conflict() || e.is_validation() {
                    // duplicate username/email reports 400, not 409
                    400
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::MissingFields(_) => 400,
            Self::Forbidden(_) | Self::CommentMismatch { .. } => 403,
            Self::Internal(_) => 500,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

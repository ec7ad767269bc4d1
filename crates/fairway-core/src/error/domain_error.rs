//! Domain error type shared by repositories and services

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Golfer with ID {0} does not exist")]
    GolferNotFound(i64),

    #[error("Course with ID {0} does not exist")]
    CourseNotFound(i64),

    #[error("Tee time with ID {0} does not exist")]
    TeetimeNotFound(i64),

    #[error("Comment {0} does not exist")]
    CommentNotFound(i64),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A golfer with that username and/or email already exists")]
    GolferAlreadyExists,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Whether this error is a not-found error (maps to HTTP 404)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GolferNotFound(_)
                | Self::CourseNotFound(_)
                | Self::TeetimeNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Whether this error is a conflict error (duplicate resource)
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::GolferAlreadyExists)
    }

    /// Whether this error is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(DomainError::GolferNotFound(1).is_not_found());
        assert!(DomainError::TeetimeNotFound(2).is_not_found());
        assert!(!DomainError::GolferAlreadyExists.is_not_found());
    }

    #[test]
    fn test_conflict_classification() {
        assert!(DomainError::GolferAlreadyExists.is_conflict());
        assert!(!DomainError::DatabaseError("boom".into()).is_conflict());
    }

    #[test]
    fn test_messages_echo_ids() {
        assert_eq!(
            DomainError::TeetimeNotFound(17).to_string(),
            "Tee time with ID 17 does not exist"
        );
    }
}

//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Course, Golfer, GolferComment, NewComment, NewCourse, NewGolfer, NewTeetime, Teetime,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Golfer Repository
// ============================================================================

#[async_trait]
pub trait GolferRepository: Send + Sync {
    /// Find golfer by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Golfer>>;

    /// Find golfer by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Golfer>>;

    /// Find golfer by exact session token
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Golfer>>;

    /// Check whether a golfer with the given username or email exists
    async fn username_or_email_exists(&self, username: &str, email: &str) -> RepoResult<bool>;

    /// Create a new golfer; the id is assigned by storage
    async fn create(&self, golfer: &NewGolfer, password_hash: &str) -> RepoResult<Golfer>;

    /// Persist the mutable profile fields of an existing golfer
    async fn update(&self, golfer: &Golfer) -> RepoResult<()>;

    /// Store a freshly issued token and its expiry
    async fn update_token(&self, id: i64, token: &str, token_exp: DateTime<Utc>) -> RepoResult<()>;

    /// Get the stored password hash for credential verification
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Delete a golfer; dependent teetimes and comments cascade
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Course Repository
// ============================================================================

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find course by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Course>>;

    /// List all courses
    async fn list(&self) -> RepoResult<Vec<Course>>;

    /// Create a new course
    async fn create(&self, course: &NewCourse) -> RepoResult<Course>;

    /// Persist the mutable fields of an existing course
    async fn update(&self, course: &Course) -> RepoResult<()>;

    /// Delete a course; linked teetimes keep their denormalized name
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Teetime Repository
// ============================================================================

#[async_trait]
pub trait TeetimeRepository: Send + Sync {
    /// Find teetime by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Teetime>>;

    /// List teetimes, optionally filtered by case-insensitive substring
    /// match on the course name
    async fn list(&self, search: Option<&str>) -> RepoResult<Vec<Teetime>>;

    /// Create a new teetime
    async fn create(&self, teetime: &NewTeetime) -> RepoResult<Teetime>;

    /// Persist the mutable fields of an existing teetime
    async fn update(&self, teetime: &Teetime) -> RepoResult<()>;

    /// Delete a teetime; its comments cascade
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GolferComment>>;

    /// List all comments on a teetime
    async fn find_by_teetime(&self, teetime_id: i64) -> RepoResult<Vec<GolferComment>>;

    /// Create a new comment
    async fn create(&self, comment: &NewComment) -> RepoResult<GolferComment>;

    /// Delete a comment
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

//! # fairway-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Course, Golfer, GolferComment, NewComment, NewCourse, NewGolfer, NewTeetime, Teetime,
    TOKEN_REUSE_MARGIN_SECS, TOKEN_TTL_SECS,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, CourseRepository, GolferRepository, RepoResult, TeetimeRepository,
};

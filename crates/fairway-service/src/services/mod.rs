//! Application services

pub mod auth;
pub mod comment;
pub mod context;
pub mod course;
pub mod error;
pub mod golfer;
pub mod teetime;

pub use auth::AuthService;
pub use comment::CommentService;
pub use context::ServiceContext;
pub use course::CourseService;
pub use error::{ServiceError, ServiceResult};
pub use golfer::GolferService;
pub use teetime::TeetimeService;

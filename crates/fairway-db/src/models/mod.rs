//! Database models with SQLx `FromRow` derives and entity conversions

pub mod comment;
pub mod course;
pub mod golfer;
pub mod teetime;

pub use comment::CommentModel;
pub use course::CourseModel;
pub use golfer::GolferModel;
pub use teetime::TeetimeModel;

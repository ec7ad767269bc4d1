//! SQLite repository implementations

pub mod comment;
pub mod course;
pub mod error;
pub mod golfer;
pub mod teetime;

pub use comment::SqliteCommentRepository;
pub use course::SqliteCourseRepository;
pub use golfer::SqliteGolferRepository;
pub use teetime::SqliteTeetimeRepository;

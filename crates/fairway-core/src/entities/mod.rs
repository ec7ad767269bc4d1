//! Domain entities

pub mod comment;
pub mod course;
pub mod golfer;
pub mod teetime;

pub use comment::{GolferComment, NewComment};
pub use course::{Course, NewCourse};
pub use golfer::{Golfer, NewGolfer, TOKEN_REUSE_MARGIN_SECS, TOKEN_TTL_SECS};
pub use teetime::{NewTeetime, Teetime};

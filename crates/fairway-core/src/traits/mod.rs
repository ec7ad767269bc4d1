//! Repository traits (ports)

pub mod repositories;

pub use repositories::{
    CommentRepository, CourseRepository, GolferRepository, RepoResult, TeetimeRepository,
};

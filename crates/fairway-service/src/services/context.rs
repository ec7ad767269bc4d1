//! Service context - dependency container for services
//!
//! Holds the repositories behind trait objects so services stay independent
//! of the storage backend. Constructed once at startup and passed to every
//! service; there are no process-wide singletons.

use std::sync::Arc;

use fairway_core::traits::{
    CommentRepository, CourseRepository, GolferRepository, TeetimeRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    golfer_repo: Arc<dyn GolferRepository>,
    course_repo: Arc<dyn CourseRepository>,
    teetime_repo: Arc<dyn TeetimeRepository>,
    comment_repo: Arc<dyn CommentRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        golfer_repo: Arc<dyn GolferRepository>,
        course_repo: Arc<dyn CourseRepository>,
        teetime_repo: Arc<dyn TeetimeRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            golfer_repo,
            course_repo,
            teetime_repo,
            comment_repo,
        }
    }

    /// Get the golfer repository
    pub fn golfer_repo(&self) -> &dyn GolferRepository {
        self.golfer_repo.as_ref()
    }

    /// Get the course repository
    pub fn course_repo(&self) -> &dyn CourseRepository {
        self.course_repo.as_ref()
    }

    /// Get the teetime repository
    pub fn teetime_repo(&self) -> &dyn TeetimeRepository {
        self.teetime_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

//! Comment service
//!
//! Comments hang off a teetime URL, so every operation first checks the
//! teetime exists, then that the comment actually belongs to it.

use tracing::{info, instrument};

use fairway_core::entities::{Golfer, NewComment};
use fairway_core::DomainError;

use crate::dto::{CommentResponse, CreateCommentRequest, SuccessResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::teetime::TeetimeService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on a teetime, authored by the authenticated golfer.
    #[instrument(skip(self, golfer, request), fields(golfer_id = golfer.golfer_id))]
    pub async fn create(
        &self,
        golfer: &Golfer,
        teetime_id: i64,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        TeetimeService::new(self.ctx).require(teetime_id).await?;

        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing));
        }

        let new_comment = NewComment {
            body: request.body.unwrap_or_default(),
            golfer_id: golfer.golfer_id,
            teetime_id,
        };

        let comment = self.ctx.comment_repo().create(&new_comment).await?;
        info!(
            golfer_comment_id = comment.golfer_comment_id,
            teetime_id, "Comment created"
        );
        Ok(CommentResponse::assemble(&comment, golfer))
    }

    /// Delete a comment; only its author may delete, and only through the
    /// teetime it belongs to.
    #[instrument(skip(self, golfer), fields(golfer_id = golfer.golfer_id))]
    pub async fn delete(
        &self,
        golfer: &Golfer,
        teetime_id: i64,
        comment_id: i64,
    ) -> ServiceResult<SuccessResponse> {
        TeetimeService::new(self.ctx).require(teetime_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.belongs_to(teetime_id) {
            return Err(ServiceError::CommentMismatch {
                comment_id,
                teetime_id,
            });
        }

        if !comment.is_authored_by(golfer.golfer_id) {
            return Err(ServiceError::forbidden(
                "You do not have permission to delete this comment",
            ));
        }

        self.ctx.comment_repo().delete(comment_id).await?;
        info!(golfer_comment_id = comment_id, "Comment deleted");
        Ok(SuccessResponse::new("Comment has been successfully deleted"))
    }
}

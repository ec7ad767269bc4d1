//! Teetime service
//!
//! Listing is public; creation, editing, and deletion require the
//! authenticated golfer, and only the owner may edit or delete. Responses
//! are hydrated one relation deep with the owner, the linked course, and
//! the comments.

use tracing::{info, instrument};

use fairway_core::entities::{Golfer, NewTeetime, Teetime};
use fairway_core::DomainError;

use crate::dto::{
    CommentResponse, CreateTeetimeRequest, SuccessResponse, TeetimeResponse, UpdateTeetimeRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Teetime service
pub struct TeetimeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeetimeService<'a> {
    /// Create a new TeetimeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List teetimes, optionally filtered by a case-insensitive substring
    /// of the course name.
    #[instrument(skip(self))]
    pub async fn list(&self, search: Option<&str>) -> ServiceResult<Vec<TeetimeResponse>> {
        let teetimes = self.ctx.teetime_repo().list(search).await?;
        let mut responses = Vec::with_capacity(teetimes.len());
        for teetime in &teetimes {
            responses.push(self.hydrate(teetime).await?);
        }
        Ok(responses)
    }

    /// Get a teetime by ID
    pub async fn get(&self, teetime_id: i64) -> ServiceResult<TeetimeResponse> {
        let teetime = self.require(teetime_id).await?;
        self.hydrate(&teetime).await
    }

    /// Create a teetime owned by the authenticated golfer.
    #[instrument(skip(self, golfer, request), fields(golfer_id = golfer.golfer_id))]
    pub async fn create(
        &self,
        golfer: &Golfer,
        request: CreateTeetimeRequest,
    ) -> ServiceResult<TeetimeResponse> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing));
        }

        if let Some(course_id) = request.course_id {
            self.ctx
                .course_repo()
                .find_by_id(course_id)
                .await?
                .ok_or(DomainError::CourseNotFound(course_id))?;
        }

        let new_teetime = NewTeetime {
            course_name: request.course_name.unwrap_or_default(),
            price: request.price.unwrap_or_default(),
            teetime_date: request.teetime_date.unwrap_or_default(),
            teetime_time: request.teetime_time.unwrap_or_default(),
            space_remaining: request.space_remaining.unwrap_or_default(),
            golfer_id: golfer.golfer_id,
            course_id: request.course_id,
        };

        let teetime = self.ctx.teetime_repo().create(&new_teetime).await?;
        info!(teetime_id = teetime.teetime_id, "Teetime created");
        self.hydrate(&teetime).await
    }

    /// Apply a whitelisted partial update; only the owner may edit.
    #[instrument(skip(self, golfer, request), fields(golfer_id = golfer.golfer_id))]
    pub async fn update(
        &self,
        golfer: &Golfer,
        teetime_id: i64,
        request: UpdateTeetimeRequest,
    ) -> ServiceResult<TeetimeResponse> {
        let mut teetime = self.require(teetime_id).await?;

        if !teetime.is_owned_by(golfer.golfer_id) {
            return Err(ServiceError::forbidden(
                "This is not your Tee Time. You do not have permission to edit",
            ));
        }

        if let Some(v) = request.price {
            teetime.price = v;
        }
        if let Some(v) = request.teetime_date {
            teetime.teetime_date = v;
        }
        if let Some(v) = request.teetime_time {
            teetime.teetime_time = v;
        }
        if let Some(v) = request.space_remaining {
            teetime.space_remaining = v;
        }

        self.ctx.teetime_repo().update(&teetime).await?;
        info!(teetime_id, "Teetime updated");
        self.hydrate(&teetime).await
    }

    /// Delete a teetime; only the owner may delete. Comments go with it.
    #[instrument(skip(self, golfer), fields(golfer_id = golfer.golfer_id))]
    pub async fn delete(&self, golfer: &Golfer, teetime_id: i64) -> ServiceResult<SuccessResponse> {
        let teetime = self.require(teetime_id).await?;

        if !teetime.is_owned_by(golfer.golfer_id) {
            return Err(ServiceError::forbidden(
                "You do not have permission to delete this Tee Time",
            ));
        }

        self.ctx.teetime_repo().delete(teetime_id).await?;
        info!(teetime_id, "Teetime deleted");
        Ok(SuccessResponse::new(format!(
            "Your Tee Time at {} was successfully deleted",
            teetime.course_name
        )))
    }

    /// Fetch the teetime or report that it does not exist.
    pub(crate) async fn require(&self, teetime_id: i64) -> ServiceResult<Teetime> {
        self.ctx
            .teetime_repo()
            .find_by_id(teetime_id)
            .await?
            .ok_or_else(|| DomainError::TeetimeNotFound(teetime_id).into())
    }

    /// Assemble the full snapshot for a teetime row.
    async fn hydrate(&self, teetime: &Teetime) -> ServiceResult<TeetimeResponse> {
        let owner = self
            .ctx
            .golfer_repo()
            .find_by_id(teetime.golfer_id)
            .await?
            .ok_or_else(|| ServiceError::internal("teetime owner missing"))?;

        let course = match teetime.course_id {
            Some(course_id) => self.ctx.course_repo().find_by_id(course_id).await?,
            None => None,
        };

        let comments = self
            .ctx
            .comment_repo()
            .find_by_teetime(teetime.teetime_id)
            .await?;
        let mut comment_responses = Vec::with_capacity(comments.len());
        for comment in &comments {
            let author = self
                .ctx
                .golfer_repo()
                .find_by_id(comment.golfer_id)
                .await?
                .ok_or_else(|| ServiceError::internal("comment author missing"))?;
            comment_responses.push(CommentResponse::assemble(comment, &author));
        }

        Ok(TeetimeResponse::assemble(
            teetime,
            &owner,
            course.as_ref(),
            comment_responses,
        ))
    }
}

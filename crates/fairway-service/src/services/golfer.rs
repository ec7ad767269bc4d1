//! Golfer profile service
//!
//! Self-service operations on the authenticated golfer's own profile.
//! Username and password never change through here; registration and token
//! handling live in the auth service.

use tracing::{info, instrument};

use fairway_core::entities::Golfer;

use crate::dto::{GolferResponse, SuccessResponse, UpdateGolferRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Golfer profile service
pub struct GolferService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GolferService<'a> {
    /// Create a new GolferService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Snapshot of the authenticated golfer's profile
    pub fn profile(&self, golfer: &Golfer) -> GolferResponse {
        GolferResponse::from(golfer)
    }

    /// Apply a whitelisted partial update to the authenticated golfer.
    #[instrument(skip(self, golfer, request), fields(golfer_id = golfer.golfer_id))]
    pub async fn update_profile(
        &self,
        mut golfer: Golfer,
        request: UpdateGolferRequest,
    ) -> ServiceResult<GolferResponse> {
        request.apply(&mut golfer);
        self.ctx.golfer_repo().update(&golfer).await?;
        info!(golfer_id = golfer.golfer_id, "Golfer profile updated");
        Ok(GolferResponse::from(&golfer))
    }

    /// Delete the authenticated golfer. Owned teetimes and authored
    /// comments go with it.
    #[instrument(skip(self, golfer), fields(golfer_id = golfer.golfer_id))]
    pub async fn delete_account(&self, golfer: &Golfer) -> ServiceResult<SuccessResponse> {
        self.ctx.golfer_repo().delete(golfer.golfer_id).await?;
        info!(golfer_id = golfer.golfer_id, "Golfer deleted");
        Ok(SuccessResponse::new("Golfer has been successfully deleted"))
    }
}

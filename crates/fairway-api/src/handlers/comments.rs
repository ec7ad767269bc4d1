//! Comment handlers
//!
//! Comments are created and deleted through their teetime's URL.

use axum::{
    extract::{Path, State},
    Json,
};

use fairway_service::{CommentResponse, CommentService, CreateCommentRequest, SuccessResponse};

use crate::extractors::{AuthGolfer, StrictJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a comment on a teetime
///
/// POST /teetimes/{teetime_id}/golfer_comments
pub async fn create_comment(
    State(state): State<AppState>,
    AuthGolfer(golfer): AuthGolfer,
    Path(teetime_id): Path<i64>,
    StrictJson(request): StrictJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create(&golfer, teetime_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a comment (author only, through its teetime)
///
/// DELETE /teetimes/{teetime_id}/golfer_comments/{golfer_comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthGolfer(golfer): AuthGolfer,
    Path((teetime_id, golfer_comment_id)): Path<(i64, i64)>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .delete(&golfer, teetime_id, golfer_comment_id)
        .await?;
    Ok(Json(response))
}

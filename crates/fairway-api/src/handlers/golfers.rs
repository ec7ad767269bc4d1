//! Golfer profile handlers
//!
//! Self-service endpoints for the bearer-authenticated golfer.

use axum::{extract::State, Json};
use fairway_service::{GolferResponse, GolferService, SuccessResponse, UpdateGolferRequest};

use crate::extractors::{AuthGolfer, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current golfer
///
/// GET /golfers/me
pub async fn get_me(
    State(state): State<AppState>,
    AuthGolfer(golfer): AuthGolfer,
) -> ApiResult<Json<GolferResponse>> {
    let service = GolferService::new(state.service_context());
    Ok(Json(service.profile(&golfer)))
}

/// Update current golfer
///
/// PUT /golfers/me
pub async fn update_me(
    State(state): State<AppState>,
    AuthGolfer(golfer): AuthGolfer,
    ValidatedJson(request): ValidatedJson<UpdateGolferRequest>,
) -> ApiResult<Json<GolferResponse>> {
    let service = GolferService::new(state.service_context());
    let response = service.update_profile(golfer, request).await?;
    Ok(Json(response))
}

/// Delete current golfer
///
/// DELETE /golfers/me
pub async fn delete_me(
    State(state): State<AppState>,
    AuthGolfer(golfer): AuthGolfer,
) -> ApiResult<Json<SuccessResponse>> {
    let service = GolferService::new(state.service_context());
    let response = service.delete_account(&golfer).await?;
    Ok(Json(response))
}

//! Teetime handlers
//!
//! Listing and lookup are public; mutations require a bearer token and are
//! restricted to the owner.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use fairway_service::{
    CreateTeetimeRequest, SuccessResponse, TeetimeResponse, TeetimeService, UpdateTeetimeRequest,
};

use crate::extractors::{AuthGolfer, StrictJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Query parameters for teetime listing
#[derive(Debug, Default, Deserialize)]
pub struct ListTeetimesQuery {
    /// Case-insensitive substring match on the course name
    pub search: Option<String>,
}

/// List teetimes
///
/// GET /teetimes?search=...
pub async fn list_teetimes(
    State(state): State<AppState>,
    Query(query): Query<ListTeetimesQuery>,
) -> ApiResult<Json<Vec<TeetimeResponse>>> {
    let service = TeetimeService::new(state.service_context());
    let response = service.list(query.search.as_deref()).await?;
    Ok(Json(response))
}

/// Get a teetime by ID
///
/// GET /teetimes/{teetime_id}
pub async fn get_teetime(
    State(state): State<AppState>,
    Path(teetime_id): Path<i64>,
) -> ApiResult<Json<TeetimeResponse>> {
    let service = TeetimeService::new(state.service_context());
    let response = service.get(teetime_id).await?;
    Ok(Json(response))
}

/// Create a teetime owned by the authenticated golfer
///
/// POST /teetimes
pub async fn create_teetime(
    State(state): State<AppState>,
    AuthGolfer(golfer): AuthGolfer,
    StrictJson(request): StrictJson<CreateTeetimeRequest>,
) -> ApiResult<Created<Json<TeetimeResponse>>> {
    let service = TeetimeService::new(state.service_context());
    let response = service.create(&golfer, request).await?;
    Ok(Created(Json(response)))
}

/// Update a teetime (owner only)
///
/// PUT /teetimes/{teetime_id}
pub async fn update_teetime(
    State(state): State<AppState>,
    AuthGolfer(golfer): AuthGolfer,
    Path(teetime_id): Path<i64>,
    StrictJson(request): StrictJson<UpdateTeetimeRequest>,
) -> ApiResult<Json<TeetimeResponse>> {
    let service = TeetimeService::new(state.service_context());
    let response = service.update(&golfer, teetime_id, request).await?;
    Ok(Json(response))
}

/// Delete a teetime (owner only)
///
/// DELETE /teetimes/{teetime_id}
pub async fn delete_teetime(
    State(state): State<AppState>,
    AuthGolfer(golfer): AuthGolfer,
    Path(teetime_id): Path<i64>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = TeetimeService::new(state.service_context());
    let response = service.delete(&golfer, teetime_id).await?;
    Ok(Json(response))
}

//! Course handlers
//!
//! Courses are shared reference data; reads are public and mutations
//! require any authenticated golfer.

use axum::{
    extract::{Path, State},
    Json,
};

use fairway_service::{
    CourseResponse, CourseService, CreateCourseRequest, SuccessResponse, UpdateCourseRequest,
};

use crate::extractors::{AuthGolfer, StrictJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List courses
///
/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<Vec<CourseResponse>>> {
    let service = CourseService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get a course by ID
///
/// GET /courses/{course_id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> ApiResult<Json<CourseResponse>> {
    let service = CourseService::new(state.service_context());
    let response = service.get(course_id).await?;
    Ok(Json(response))
}

/// Create a course
///
/// POST /courses
pub async fn create_course(
    State(state): State<AppState>,
    AuthGolfer(_golfer): AuthGolfer,
    StrictJson(request): StrictJson<CreateCourseRequest>,
) -> ApiResult<Created<Json<CourseResponse>>> {
    let service = CourseService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a course
///
/// PUT /courses/{course_id}
pub async fn update_course(
    State(state): State<AppState>,
    AuthGolfer(_golfer): AuthGolfer,
    Path(course_id): Path<i64>,
    StrictJson(request): StrictJson<UpdateCourseRequest>,
) -> ApiResult<Json<CourseResponse>> {
    let service = CourseService::new(state.service_context());
    let response = service.update(course_id, request).await?;
    Ok(Json(response))
}

/// Delete a course
///
/// DELETE /courses/{course_id}
pub async fn delete_course(
    State(state): State<AppState>,
    AuthGolfer(_golfer): AuthGolfer,
    Path(course_id): Path<i64>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = CourseService::new(state.service_context());
    let response = service.delete(course_id).await?;
    Ok(Json(response))
}

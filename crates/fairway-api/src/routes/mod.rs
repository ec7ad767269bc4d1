//! Route definitions
//!
//! All API routes organized by resource and mounted at the root.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, comments, courses, golfers, health, teetimes};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth_routes())
        .merge(golfer_routes())
        .merge(teetime_routes())
        .merge(course_routes())
}

/// Registration and token routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/golfers", post(auth::register))
        .route("/token", get(auth::get_token))
        .route("/login", get(auth::get_token))
}

/// Golfer self-service routes
fn golfer_routes() -> Router<AppState> {
    Router::new()
        .route("/golfers/me", get(golfers::get_me))
        .route("/golfers/me", put(golfers::update_me))
        .route("/golfers/me", delete(golfers::delete_me))
}

/// Teetime and comment routes
fn teetime_routes() -> Router<AppState> {
    Router::new()
        .route("/teetimes", get(teetimes::list_teetimes))
        .route("/teetimes", post(teetimes::create_teetime))
        .route("/teetimes/:teetime_id", get(teetimes::get_teetime))
        .route("/teetimes/:teetime_id", put(teetimes::update_teetime))
        .route("/teetimes/:teetime_id", delete(teetimes::delete_teetime))
        .route(
            "/teetimes/:teetime_id/golfer_comments",
            post(comments::create_comment),
        )
        .route(
            "/teetimes/:teetime_id/golfer_comments/:golfer_comment_id",
            delete(comments::delete_comment),
        )
}

/// Course routes
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list_courses))
        .route("/courses", post(courses::create_course))
        .route("/courses/:course_id", get(courses::get_course))
        .route("/courses/:course_id", put(courses::update_course))
        .route("/courses/:course_id", delete(courses::delete_course))
}

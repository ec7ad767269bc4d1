//! End-to-end API tests
//!
//! Drives the full router against an in-memory SQLite database, so every
//! request exercises routing, extractors, services, and repositories.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{json, Value};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

use fairway_api::{create_app, state::AppState};
use fairway_common::{AppConfig, DatabaseConfig, ServerConfig};
use fairway_db::{
    init_schema, SqliteCommentRepository, SqliteCourseRepository, SqliteGolferRepository,
    SqliteTeetimeRepository,
};
use fairway_service::ServiceContext;

// ============================================================================
// Helpers
// ============================================================================

/// In-memory SQLite shares state only within a single connection, so the
/// pool is capped at one.
async fn test_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    init_schema(&pool).await.expect("init schema");

    let context = ServiceContext::new(
        Arc::new(SqliteGolferRepository::new(pool.clone())),
        Arc::new(SqliteCourseRepository::new(pool.clone())),
        Arc::new(SqliteTeetimeRepository::new(pool.clone())),
        Arc::new(SqliteCommentRepository::new(pool.clone())),
    );

    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
    };

    (create_app(AppState::new(context, config)), pool)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_json_request(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn register_body(username: &str, email: &str) -> Value {
    json!({
        "first_name": "Test",
        "last_name": "Golfer",
        "email": email,
        "username": username,
        "password": "secret123",
        "golfer_age": 30,
        "city": "Augusta",
        "district": "GA",
        "country": "USA"
    })
}

async fn register(app: &Router, username: &str, email: &str) -> Value {
    let (status, body) = send(app, json_request("POST", "/golfers", &register_body(username, email))).await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    body
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let credentials = BASE64.encode(format!("{username}:{password}"));
    let request = Request::builder()
        .method("GET")
        .uri("/token")
        .header(header::AUTHORIZATION, format!("Basic {credentials}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("token present").to_string()
}

async fn create_teetime(app: &Router, token: &str, course_name: &str) -> Value {
    let body = json!({
        "course_name": course_name,
        "price": 120,
        "teetime_date": "2026-09-12",
        "teetime_time": "07:30",
        "space_remaining": 3
    });
    let (status, body) = send(app, authed_json_request("POST", "/teetimes", token, &body)).await;
    assert_eq!(status, StatusCode::CREATED, "teetime creation failed: {body}");
    body
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (app, _pool) = test_app().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_returns_profile_without_credentials() {
    let (app, _pool) = test_app().await;
    let body = register(&app, "hogan", "ben@example.com").await;

    assert_eq!(body["username"], "hogan");
    assert_eq!(body["golfer_id"], 1);
    let object = body.as_object().unwrap();
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("password_hash"));
    assert!(!object.contains_key("token"));
}

#[tokio::test]
async fn test_register_duplicate_username_or_email() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;

    // Same username, different email
    let (status, body) = send(
        &app,
        json_request("POST", "/golfers", &register_body("hogan", "other@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "A golfer with that username and/or email already exists"
    );

    // Different username, same email
    let (status, _) = send(
        &app,
        json_request("POST", "/golfers", &register_body("snead", "ben@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_lists_missing_fields() {
    let (app, _pool) = test_app().await;
    let (status, body) = send(
        &app,
        json_request("POST", "/golfers", &json!({"first_name": "Ben", "username": "hogan"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "last_name, email, password, golfer_age, city, district, country must be in the request body"
    );
}

#[tokio::test]
async fn test_register_requires_json_content_type() {
    let (app, _pool) = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/golfers")
        .body(Body::from(register_body("hogan", "ben@example.com").to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Your content-type must be application/json");
}

// ============================================================================
// Login and tokens
// ============================================================================

#[tokio::test]
async fn test_login_issues_token() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;

    let credentials = BASE64.encode("hogan:secret123");
    let request = Request::builder()
        .method("GET")
        .uri("/login")
        .header(header::AUTHORIZATION, format!("Basic {credentials}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().unwrap();
    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(body["tokenExp"].is_string());
}

#[tokio::test]
async fn test_repeated_login_reuses_fresh_token() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;

    let first = login(&app, "hogan", "secret123").await;
    let second = login(&app, "hogan", "secret123").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;

    let credentials = BASE64.encode("hogan:wrongpass");
    let request = Request::builder()
        .method("GET")
        .uri("/token")
        .header(header::AUTHORIZATION, format!("Basic {credentials}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["error"],
        "Incorrect username and/or password. Please try again"
    );
}

#[tokio::test]
async fn test_unknown_token_rejected() {
    let (app, _pool) = test_app().await;
    let (status, body) = send(&app, authed_request("GET", "/golfers/me", "deadbeef")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Incorrect token. Please try again");
}

#[tokio::test]
async fn test_missing_authorization_header_rejected() {
    let (app, _pool) = test_app().await;
    let request = Request::builder()
        .method("GET")
        .uri("/golfers/me")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let (app, pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;

    sqlx::query("UPDATE golfers SET token_exp = datetime('now', '-1 hour') WHERE username = ?")
        .bind("hogan")
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = send(&app, authed_request("GET", "/golfers/me", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Incorrect token. Please try again");
}

// ============================================================================
// Golfer profile
// ============================================================================

#[tokio::test]
async fn test_get_and_update_me() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;

    let (status, body) = send(&app, authed_request("GET", "/golfers/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "hogan");

    let update = json!({"city": "Fort Worth", "handicap": 2.4, "smoker": false});
    let (status, body) = send(
        &app,
        authed_json_request("PUT", "/golfers/me", &token, &update),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Fort Worth");
    assert_eq!(body["handicap"], 2.4);
    assert_eq!(body["smoker"], false);
    // untouched fields survive
    assert_eq!(body["country"], "USA");
}

#[tokio::test]
async fn test_update_me_rejects_username_change() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;

    let (status, _) = send(
        &app,
        authed_json_request("PUT", "/golfers/me", &token, &json!({"username": "newname"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_me_cascades_to_teetimes() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;
    create_teetime(&app, &token, "Colonial").await;

    let (status, body) = send(&app, authed_request("DELETE", "/golfers/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], "Golfer has been successfully deleted");

    // Credentials and owned teetimes are gone
    let request = Request::builder().uri("/teetimes").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (status, _) = send(&app, authed_request("GET", "/golfers/me", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Teetimes
// ============================================================================

#[tokio::test]
async fn test_teetime_create_embeds_owner_and_comments() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;

    let body = create_teetime(&app, &token, "Pebble Beach").await;
    assert_eq!(body["course_name"], "Pebble Beach");
    assert_eq!(body["golfer"]["username"], "hogan");
    assert!(body["golfer"].get("password").is_none());
    assert_eq!(body["golfer_comments"].as_array().unwrap().len(), 0);
    assert!(body["course_details"].is_null());
}

#[tokio::test]
async fn test_teetime_create_requires_auth() {
    let (app, _pool) = test_app().await;
    let body = json!({
        "course_name": "Pebble Beach",
        "price": 120,
        "teetime_date": "2026-09-12",
        "teetime_time": "07:30",
        "space_remaining": 3
    });
    let (status, _) = send(&app, json_request("POST", "/teetimes", &body)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_teetime_missing_fields() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;

    let (status, body) = send(
        &app,
        authed_json_request("POST", "/teetimes", &token, &json!({"course_name": "Pebble Beach"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "price, teetime_date, teetime_time, space_remaining must be in the request body"
    );
}

#[tokio::test]
async fn test_get_unknown_teetime() {
    let (app, _pool) = test_app().await;
    let request = Request::builder().uri("/teetimes/999").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Tee time with ID 999 does not exist");
}

#[tokio::test]
async fn test_teetime_update_by_owner() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;
    let teetime = create_teetime(&app, &token, "Pebble Beach").await;
    let id = teetime["teetime_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        authed_json_request(
            "PUT",
            &format!("/teetimes/{id}"),
            &token,
            &json!({"price": 200, "space_remaining": 1}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 200);
    assert_eq!(body["space_remaining"], 1);
    assert_eq!(body["teetime_time"], "07:30");
}

#[tokio::test]
async fn test_teetime_update_rejects_ownership_transfer() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;
    let teetime = create_teetime(&app, &token, "Pebble Beach").await;
    let id = teetime["teetime_id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        authed_json_request(
            "PUT",
            &format!("/teetimes/{id}"),
            &token,
            &json!({"golfer_id": 99}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_teetime_update_by_non_owner() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    register(&app, "snead", "sam@example.com").await;
    let owner_token = login(&app, "hogan", "secret123").await;
    let other_token = login(&app, "snead", "secret123").await;
    let teetime = create_teetime(&app, &owner_token, "Pebble Beach").await;
    let id = teetime["teetime_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        authed_json_request(
            "PUT",
            &format!("/teetimes/{id}"),
            &other_token,
            &json!({"price": 5}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "This is not your Tee Time. You do not have permission to edit"
    );
}

#[tokio::test]
async fn test_teetime_delete_by_non_owner() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    register(&app, "snead", "sam@example.com").await;
    let owner_token = login(&app, "hogan", "secret123").await;
    let other_token = login(&app, "snead", "secret123").await;
    let teetime = create_teetime(&app, &owner_token, "Pebble Beach").await;
    let id = teetime["teetime_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        authed_request("DELETE", &format!("/teetimes/{id}"), &other_token),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You do not have permission to delete this Tee Time");
}

#[tokio::test]
async fn test_teetime_delete_by_owner() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;
    let teetime = create_teetime(&app, &token, "Pebble Beach").await;
    let id = teetime["teetime_id"].as_i64().unwrap();

    let (status, body) = send(&app, authed_request("DELETE", &format!("/teetimes/{id}"), &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["success"],
        "Your Tee Time at Pebble Beach was successfully deleted"
    );

    let request = Request::builder()
        .uri(format!("/teetimes/{id}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_teetime_search_is_case_insensitive_substring() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;
    create_teetime(&app, &token, "Pebble Beach").await;
    create_teetime(&app, &token, "St Andrews").await;

    let request = Request::builder()
        .uri("/teetimes?search=pebble")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["course_name"], "Pebble Beach");

    // No filter lists everything
    let request = Request::builder().uri("/teetimes").body(Body::empty()).unwrap();
    let (_, body) = send(&app, request).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_comment_create_and_embed() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    register(&app, "snead", "sam@example.com").await;
    let owner_token = login(&app, "hogan", "secret123").await;
    let commenter_token = login(&app, "snead", "secret123").await;
    let teetime = create_teetime(&app, &owner_token, "Pebble Beach").await;
    let id = teetime["teetime_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        authed_json_request(
            "POST",
            &format!("/teetimes/{id}/golfer_comments"),
            &commenter_token,
            &json!({"body": "Count me in"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["body"], "Count me in");
    assert_eq!(body["golfer"]["username"], "snead");

    // The comment shows up on the teetime with its author embedded
    let request = Request::builder()
        .uri(format!("/teetimes/{id}"))
        .body(Body::empty())
        .unwrap();
    let (_, body) = send(&app, request).await;
    let comments = body["golfer_comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["golfer"]["username"], "snead");
}

#[tokio::test]
async fn test_comment_missing_body() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;
    let teetime = create_teetime(&app, &token, "Pebble Beach").await;
    let id = teetime["teetime_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        authed_json_request(
            "POST",
            &format!("/teetimes/{id}/golfer_comments"),
            &token,
            &json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "body must be in the request body");
}

#[tokio::test]
async fn test_comment_delete_through_wrong_teetime() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;
    let first = create_teetime(&app, &token, "Pebble Beach").await;
    let second = create_teetime(&app, &token, "St Andrews").await;
    let first_id = first["teetime_id"].as_i64().unwrap();
    let second_id = second["teetime_id"].as_i64().unwrap();

    let (_, comment) = send(
        &app,
        authed_json_request(
            "POST",
            &format!("/teetimes/{first_id}/golfer_comments"),
            &token,
            &json!({"body": "Count me in"}),
        ),
    )
    .await;
    let comment_id = comment["golfer_comment_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        authed_request(
            "DELETE",
            &format!("/teetimes/{second_id}/golfer_comments/{comment_id}"),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        format!("Comment #{comment_id} is not associated with tee time #{second_id}")
    );
}

#[tokio::test]
async fn test_comment_delete_by_author_only() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    register(&app, "snead", "sam@example.com").await;
    let author_token = login(&app, "hogan", "secret123").await;
    let other_token = login(&app, "snead", "secret123").await;
    let teetime = create_teetime(&app, &author_token, "Pebble Beach").await;
    let id = teetime["teetime_id"].as_i64().unwrap();

    let (_, comment) = send(
        &app,
        authed_json_request(
            "POST",
            &format!("/teetimes/{id}/golfer_comments"),
            &author_token,
            &json!({"body": "Count me in"}),
        ),
    )
    .await;
    let comment_id = comment["golfer_comment_id"].as_i64().unwrap();
    let uri = format!("/teetimes/{id}/golfer_comments/{comment_id}");

    let (status, body) = send(&app, authed_request("DELETE", &uri, &other_token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You do not have permission to delete this comment");

    let (status, body) = send(&app, authed_request("DELETE", &uri, &author_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], "Comment has been successfully deleted");
}

// ============================================================================
// Courses
// ============================================================================

#[tokio::test]
async fn test_course_crud_and_teetime_link() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;

    let course_body = json!({
        "course_name": "Pebble Beach",
        "address": "1700 17 Mile Dr",
        "city": "Pebble Beach",
        "district": "CA",
        "country": "USA",
        "par": 72,
        "rating": 75.5,
        "designer": "Jack Neville"
    });
    let (status, course) = send(&app, authed_json_request("POST", "/courses", &token, &course_body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let course_id = course["course_id"].as_i64().unwrap();
    assert_eq!(course["par"], 72);

    // Link a teetime to the stored course
    let teetime_body = json!({
        "course_name": "Pebble Beach",
        "price": 550,
        "teetime_date": "2026-09-12",
        "teetime_time": "07:30",
        "space_remaining": 2,
        "course_id": course_id
    });
    let (status, teetime) = send(&app, authed_json_request("POST", "/teetimes", &token, &teetime_body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(teetime["course_details"]["course_id"], course_id);
    assert_eq!(teetime["course_details"]["designer"], "Jack Neville");
    let teetime_id = teetime["teetime_id"].as_i64().unwrap();

    // Update the course
    let (status, updated) = send(
        &app,
        authed_json_request(
            "PUT",
            &format!("/courses/{course_id}"),
            &token,
            &json!({"weekday_price": 500}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["weekday_price"], 500);

    // Deleting the course detaches the link but keeps the teetime
    let (status, body) = send(
        &app,
        authed_request("DELETE", &format!("/courses/{course_id}"), &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], "Course has been successfully deleted");

    let request = Request::builder()
        .uri(format!("/teetimes/{teetime_id}"))
        .body(Body::empty())
        .unwrap();
    let (status, teetime) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(teetime["course_details"].is_null());
    assert_eq!(teetime["course_name"], "Pebble Beach");
}

#[tokio::test]
async fn test_course_create_missing_fields() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;

    let (status, body) = send(
        &app,
        authed_json_request("POST", "/courses", &token, &json!({"course_name": "Pebble Beach"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "address, city, district, country, par must be in the request body"
    );
}

#[tokio::test]
async fn test_course_linking_unknown_course() {
    let (app, _pool) = test_app().await;
    register(&app, "hogan", "ben@example.com").await;
    let token = login(&app, "hogan", "secret123").await;

    let teetime_body = json!({
        "course_name": "Pebble Beach",
        "price": 550,
        "teetime_date": "2026-09-12",
        "teetime_time": "07:30",
        "space_remaining": 2,
        "course_id": 41
    });
    let (status, body) = send(&app, authed_json_request("POST", "/teetimes", &token, &teetime_body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course with ID 41 does not exist");
}

//! Health check handler

use axum::Json;
use serde_json::{json, Value};

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

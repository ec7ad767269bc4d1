//! Authentication handlers
//!
//! Registration is open; token issuance requires HTTP Basic credentials.

use axum::{extract::State, Json};
use fairway_service::{AuthService, GolferResponse, RegisterGolferRequest, TokenResponse};

use crate::extractors::{BasicAuthGolfer, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new golfer
///
/// POST /golfers
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterGolferRequest>,
) -> ApiResult<Created<Json<GolferResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Issue a session token for Basic-authenticated credentials
///
/// GET /token and GET /login
pub async fn get_token(
    State(state): State<AppState>,
    BasicAuthGolfer(golfer): BasicAuthGolfer,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.issue_token(&golfer).await?;
    Ok(Json(response))
}

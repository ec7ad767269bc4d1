//! Authentication extractors
//!
//! `BasicAuthGolfer` verifies HTTP Basic credentials against the stored
//! password hash. `AuthGolfer` resolves a bearer token to its golfer and
//! rejects expired tokens. Both yield the full golfer row so handlers never
//! re-fetch the principal.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{
        authorization::{Basic, Bearer},
        Authorization,
    },
    TypedHeader,
};
use fairway_common::AppError;
use fairway_core::Golfer;
use fairway_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Golfer authenticated by bearer token
#[derive(Debug, Clone)]
pub struct AuthGolfer(pub Golfer);

#[async_trait]
impl<S> FromRequestParts<S> for AuthGolfer
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A missing or malformed header reads the same as a bad token
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::InvalidToken))?;

        let app_state = AppState::from_ref(state);
        let golfer = AuthService::new(app_state.service_context())
            .authenticate_token(bearer.token())
            .await?;

        Ok(AuthGolfer(golfer))
    }
}

/// Golfer authenticated by HTTP Basic credentials
#[derive(Debug, Clone)]
pub struct BasicAuthGolfer(pub Golfer);

#[async_trait]
impl<S> FromRequestParts<S> for BasicAuthGolfer
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::InvalidCredentials))?;

        let app_state = AppState::from_ref(state);
        let golfer = AuthService::new(app_state.service_context())
            .authenticate_basic(basic.username(), basic.password())
            .await?;

        Ok(BasicAuthGolfer(golfer))
    }
}

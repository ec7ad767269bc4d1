//! Authentication service
//!
//! Registration, credential verification, token issuance, and token
//! verification. Verification never mutates state; issuance persists a new
//! token only when the stored one is missing or about to expire.

use chrono::Utc;
use tracing::{info, instrument, warn};

use fairway_common::auth::{generate_token, hash_password, verify_password};
use fairway_common::AppError;
use fairway_core::entities::{Golfer, NewGolfer};
use fairway_core::DomainError;

use crate::dto::{GolferResponse, RegisterGolferRequest, TokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new golfer
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterGolferRequest) -> ServiceResult<GolferResponse> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing));
        }

        // All present after the check above
        let password = request.password.unwrap_or_default();
        let new_golfer = NewGolfer {
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            username: request.username.unwrap_or_default(),
            golfer_age: request.golfer_age.unwrap_or_default(),
            city: request.city.unwrap_or_default(),
            district: request.district.unwrap_or_default(),
            country: request.country.unwrap_or_default(),
        };

        if self
            .ctx
            .golfer_repo()
            .username_or_email_exists(&new_golfer.username, &new_golfer.email)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::GolferAlreadyExists));
        }

        let password_hash = hash_password(&password)?;
        let golfer = self
            .ctx
            .golfer_repo()
            .create(&new_golfer, &password_hash)
            .await?;

        info!(golfer_id = golfer.golfer_id, "Golfer registered");
        Ok(GolferResponse::from(&golfer))
    }

    /// Verify HTTP Basic credentials and return the authenticated golfer.
    ///
    /// The same generic error covers an unknown username and a wrong
    /// password.
    #[instrument(skip(self, password))]
    pub async fn authenticate_basic(
        &self,
        username: &str,
        password: &str,
    ) -> ServiceResult<Golfer> {
        let golfer = self
            .ctx
            .golfer_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!(username, "Basic auth failed: unknown username");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .golfer_repo()
            .get_password_hash(golfer.golfer_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidCredentials))?;

        if !verify_password(password, &password_hash)? {
            warn!(golfer_id = golfer.golfer_id, "Basic auth failed: password mismatch");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        Ok(golfer)
    }

    /// Verify a bearer token and return the authenticated golfer.
    #[instrument(skip(self, token))]
    pub async fn authenticate_token(&self, token: &str) -> ServiceResult<Golfer> {
        let golfer = self
            .ctx
            .golfer_repo()
            .find_by_token(token)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if !golfer.token_valid_at(Utc::now()) {
            warn!(golfer_id = golfer.golfer_id, "Bearer auth failed: token expired");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        Ok(golfer)
    }

    /// Issue a session token for an already-authenticated golfer.
    ///
    /// A token with more than a minute of validity left is returned
    /// unchanged so rapid repeated logins do not churn tokens.
    #[instrument(skip(self, golfer), fields(golfer_id = golfer.golfer_id))]
    pub async fn issue_token(&self, golfer: &Golfer) -> ServiceResult<TokenResponse> {
        let now = Utc::now();

        if golfer.token_reusable_at(now) {
            // Both present whenever the reuse check passes
            let (Some(token), Some(token_exp)) = (golfer.token.clone(), golfer.token_exp) else {
                return Err(ServiceError::internal("token reuse check without token"));
            };
            return Ok(TokenResponse { token, token_exp });
        }

        let issued = generate_token(now);
        self.ctx
            .golfer_repo()
            .update_token(golfer.golfer_id, &issued.token, issued.token_exp)
            .await?;

        info!(golfer_id = golfer.golfer_id, "Session token issued");
        Ok(TokenResponse {
            token: issued.token,
            token_exp: issued.token_exp,
        })
    }
}

//! JSON body extractors
//!
//! `StrictJson` extracts a JSON body and turns a missing or wrong
//! `Content-Type` into the API's fixed 400 message. `ValidatedJson` adds
//! field validation via the `validator` crate on top of that.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Strict JSON extractor
///
/// Rejects bodies without an `application/json` content type using the
/// API's fixed message, and surfaces deserialization errors as 400s.
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for StrictJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::bad_request("Your content-type must be application/json")
            }
            JsonRejection::JsonDataError(e) => ApiError::bad_request(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::bad_request(e.body_text()),
            _ => ApiError::bad_request("Invalid JSON body"),
        })?;

        Ok(StrictJson(value))
    }
}

/// Validated JSON extractor
///
/// Extracts a JSON body like `StrictJson` and then validates it using the
/// `validator` crate.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let StrictJson(value) = StrictJson::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

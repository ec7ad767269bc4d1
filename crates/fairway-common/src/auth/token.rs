//! Opaque session token generation
//!
//! Tokens are 32 lowercase hex characters, valid for one hour from
//! issuance. Verification and the reuse debounce live with the golfer
//! entity and the auth service.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use fairway_core::TOKEN_TTL_SECS;

/// A freshly issued (or reused) session token with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub token_exp: DateTime<Utc>,
}

/// Generate a new opaque session token expiring one hour from `now`.
#[must_use]
pub fn generate_token(now: DateTime<Utc>) -> IssuedToken {
    IssuedToken {
        token: Uuid::new_v4().simple().to_string(),
        token_exp: now + Duration::seconds(TOKEN_TTL_SECS),
    }
}

//! Golfer entity - a registered player on the platform

use chrono::{DateTime, Duration, Utc};

/// Lifetime of a freshly issued session token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Remaining validity under which a login reissues the token instead of
/// reusing it, in seconds.
pub const TOKEN_REUSE_MARGIN_SECS: i64 = 60;

/// Golfer entity representing a registered platform user.
///
/// The password hash is not part of the entity; it is handled separately by
/// the repository so it never travels with profile data. The session token
/// and its expiry live here because they are owned by the golfer row:
/// both are set together on login and cleared together on logout/expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Golfer {
    pub golfer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub golfer_age: i64,
    pub handicap: Option<f64>,
    pub right_handed: Option<bool>,
    pub alcohol: Option<bool>,
    pub legal_drugs: Option<bool>,
    pub smoker: Option<bool>,
    pub gambler: Option<bool>,
    pub music: Option<bool>,
    pub tees: Option<String>,
    pub phone: Option<String>,
    pub city: String,
    pub district: String,
    pub country: String,
    pub token: Option<String>,
    pub token_exp: Option<DateTime<Utc>>,
}

impl Golfer {
    /// Whether the stored token is valid at `now`.
    pub fn token_valid_at(&self, now: DateTime<Utc>) -> bool {
        match (&self.token, self.token_exp) {
            (Some(_), Some(exp)) => now < exp,
            _ => false,
        }
    }

    /// Whether the stored token still has more than the reuse margin of
    /// validity left, in which case login returns it unchanged.
    pub fn token_reusable_at(&self, now: DateTime<Utc>) -> bool {
        match (&self.token, self.token_exp) {
            (Some(_), Some(exp)) => exp > now + Duration::seconds(TOKEN_REUSE_MARGIN_SECS),
            _ => false,
        }
    }
}

/// Field set for registering a new golfer. The id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewGolfer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub golfer_age: i64,
    pub city: String,
    pub district: String,
    pub country: String,
}

//! Golfer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use fairway_core::Golfer;

/// Database model for the golfers table
#[derive(Debug, Clone, FromRow)]
pub struct GolferModel {
    pub golfer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
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

// The password hash stays behind in the model; the entity never carries it.
impl From<GolferModel> for Golfer {
    fn from(model: GolferModel) -> Self {
        Golfer {
            golfer_id: model.golfer_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            username: model.username,
            golfer_age: model.golfer_age,
            handicap: model.handicap,
            right_handed: model.right_handed,
            alcohol: model.alcohol,
            legal_drugs: model.legal_drugs,
            smoker: model.smoker,
            gambler: model.gambler,
            music: model.music,
            tees: model.tees,
            phone: model.phone,
            city: model.city,
            district: model.district,
            country: model.country,
            token: model.token,
            token_exp: model.token_exp,
        }
    }
}

//! Teetime database model

use sqlx::FromRow;

use fairway_core::Teetime;

/// Database model for the teetimes table
#[derive(Debug, Clone, FromRow)]
pub struct TeetimeModel {
    pub teetime_id: i64,
    pub course_name: String,
    pub price: i64,
    pub teetime_date: String,
    pub teetime_time: String,
    pub space_remaining: i64,
    pub golfer_id: i64,
    pub course_id: Option<i64>,
}

impl From<TeetimeModel> for Teetime {
    fn from(model: TeetimeModel) -> Self {
        Teetime {
            teetime_id: model.teetime_id,
            course_name: model.course_name,
            price: model.price,
            teetime_date: model.teetime_date,
            teetime_time: model.teetime_time,
            space_remaining: model.space_remaining,
            golfer_id: model.golfer_id,
            course_id: model.course_id,
        }
    }
}

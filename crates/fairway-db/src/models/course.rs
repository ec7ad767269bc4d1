//! Course database model

use sqlx::FromRow;

use fairway_core::Course;

/// Database model for the courses table
#[derive(Debug, Clone, FromRow)]
pub struct CourseModel {
    pub course_id: i64,
    pub course_name: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub country: String,
    pub weekday_price: Option<i64>,
    pub weekend_price: Option<i64>,
    pub strict_dress: Option<bool>,
    pub rating: Option<f64>,
    pub slope: Option<f64>,
    pub course_length: Option<i64>,
    pub par: i64,
    pub designer: Option<String>,
}

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            course_id: model.course_id,
            course_name: model.course_name,
            address: model.address,
            city: model.city,
            district: model.district,
            country: model.country,
            weekday_price: model.weekday_price,
            weekend_price: model.weekend_price,
            strict_dress: model.strict_dress,
            rating: model.rating,
            slope: model.slope,
            course_length: model.course_length,
            par: model.par,
            designer: model.designer,
        }
    }
}

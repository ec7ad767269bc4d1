//! Course entity - a golf course

/// Course entity. Courses are not owned by any golfer; any authenticated
/// golfer may create or edit them.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
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

/// Field set for creating a new course.
#[derive(Debug, Clone)]
pub struct NewCourse {
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

//! Request DTOs for API endpoints
//!
//! Creation bodies keep every required field optional at the serde level so
//! the 400 response can name every missing field at once, comma-joined.
//! Update bodies are strict allow-lists: `deny_unknown_fields` turns a
//! disallowed field into a 400 instead of silently dropping it.

use serde::Deserialize;
use validator::Validate;

use fairway_core::Golfer;

// ============================================================================
// Golfer Requests
// ============================================================================

/// Golfer registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterGolferRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub username: Option<String>,
    pub password: Option<String>,
    pub golfer_age: Option<i64>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub country: Option<String>,
}

impl RegisterGolferRequest {
    /// Names of required fields absent from the body, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.is_none() {
            missing.push("first_name");
        }
        if self.last_name.is_none() {
            missing.push("last_name");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.username.is_none() {
            missing.push("username");
        }
        if self.password.is_none() {
            missing.push("password");
        }
        if self.golfer_age.is_none() {
            missing.push("golfer_age");
        }
        if self.city.is_none() {
            missing.push("city");
        }
        if self.district.is_none() {
            missing.push("district");
        }
        if self.country.is_none() {
            missing.push("country");
        }
        missing
    }
}

/// Update current golfer request (strict allow-list)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateGolferRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub golfer_age: Option<i64>,
    pub handicap: Option<f64>,
    pub right_handed: Option<bool>,
    pub alcohol: Option<bool>,
    pub legal_drugs: Option<bool>,
    pub smoker: Option<bool>,
    pub gambler: Option<bool>,
    pub music: Option<bool>,
    pub tees: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub country: Option<String>,
}

impl UpdateGolferRequest {
    /// Apply the present fields to the golfer.
    pub fn apply(self, golfer: &mut Golfer) {
        if let Some(v) = self.first_name {
            golfer.first_name = v;
        }
        if let Some(v) = self.last_name {
            golfer.last_name = v;
        }
        if let Some(v) = self.email {
            golfer.email = v;
        }
        if let Some(v) = self.golfer_age {
            golfer.golfer_age = v;
        }
        if let Some(v) = self.handicap {
            golfer.handicap = Some(v);
        }
        if let Some(v) = self.right_handed {
            golfer.right_handed = Some(v);
        }
        if let Some(v) = self.alcohol {
            golfer.alcohol = Some(v);
        }
        if let Some(v) = self.legal_drugs {
            golfer.legal_drugs = Some(v);
        }
        if let Some(v) = self.smoker {
            golfer.smoker = Some(v);
        }
        if let Some(v) = self.gambler {
            golfer.gambler = Some(v);
        }
        if let Some(v) = self.music {
            golfer.music = Some(v);
        }
        if let Some(v) = self.tees {
            golfer.tees = Some(v);
        }
        if let Some(v) = self.phone {
            golfer.phone = Some(v);
        }
        if let Some(v) = self.city {
            golfer.city = v;
        }
        if let Some(v) = self.district {
            golfer.district = v;
        }
        if let Some(v) = self.country {
            golfer.country = v;
        }
    }
}

// ============================================================================
// Teetime Requests
// ============================================================================

/// Create teetime request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeetimeRequest {
    pub course_name: Option<String>,
    pub price: Option<i64>,
    pub teetime_date: Option<String>,
    pub teetime_time: Option<String>,
    pub space_remaining: Option<i64>,
    /// Optional link to a stored course
    pub course_id: Option<i64>,
}

impl CreateTeetimeRequest {
    /// Names of required fields absent from the body, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.course_name.is_none() {
            missing.push("course_name");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.teetime_date.is_none() {
            missing.push("teetime_date");
        }
        if self.teetime_time.is_none() {
            missing.push("teetime_time");
        }
        if self.space_remaining.is_none() {
            missing.push("space_remaining");
        }
        missing
    }
}

/// Update teetime request (strict allow-list)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTeetimeRequest {
    pub price: Option<i64>,
    pub teetime_date: Option<String>,
    pub teetime_time: Option<String>,
    pub space_remaining: Option<i64>,
}

// ============================================================================
// Course Requests
// ============================================================================

/// Create course request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub course_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub country: Option<String>,
    pub par: Option<i64>,
    pub weekday_price: Option<i64>,
    pub weekend_price: Option<i64>,
    pub strict_dress: Option<bool>,
    pub rating: Option<f64>,
    pub slope: Option<f64>,
    pub course_length: Option<i64>,
    pub designer: Option<String>,
}

impl CreateCourseRequest {
    /// Names of required fields absent from the body, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.course_name.is_none() {
            missing.push("course_name");
        }
        if self.address.is_none() {
            missing.push("address");
        }
        if self.city.is_none() {
            missing.push("city");
        }
        if self.district.is_none() {
            missing.push("district");
        }
        if self.country.is_none() {
            missing.push("country");
        }
        if self.par.is_none() {
            missing.push("par");
        }
        missing
    }
}

/// Update course request (strict allow-list)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCourseRequest {
    pub course_name: Option<String>,
    pub weekday_price: Option<i64>,
    pub weekend_price: Option<i64>,
    pub strict_dress: Option<bool>,
    pub rating: Option<f64>,
    pub slope: Option<f64>,
    pub course_length: Option<i64>,
    pub par: Option<i64>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub body: Option<String>,
}

impl CreateCommentRequest {
    /// Names of required fields absent from the body.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        if self.body.is_none() {
            vec!["body"]
        } else {
            Vec::new()
        }
    }
}

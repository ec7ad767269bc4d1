//! Response DTOs for API endpoints
//!
//! Snapshots mirror the stored rows one relation deep: teetimes embed their
//! course, owner, and comments; comments embed their author. Golfer
//! snapshots never include the password hash or session token.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fairway_core::{Course, Golfer, GolferComment, Teetime};

// ============================================================================
// Common Response Types
// ============================================================================

/// Success message body: `{"success": "..."}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Session token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(rename = "tokenExp")]
    pub token_exp: DateTime<Utc>,
}

// ============================================================================
// Golfer Responses
// ============================================================================

/// Golfer snapshot
#[derive(Debug, Clone, Serialize)]
pub struct GolferResponse {
    pub golfer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub handicap: Option<f64>,
    pub golfer_age: i64,
    pub phone: Option<String>,
    pub city: String,
    pub district: String,
    pub country: String,
    pub right_handed: Option<bool>,
    pub alcohol: Option<bool>,
    pub legal_drugs: Option<bool>,
    pub smoker: Option<bool>,
    pub gambler: Option<bool>,
    pub music: Option<bool>,
    pub tees: Option<String>,
}

impl From<&Golfer> for GolferResponse {
    fn from(golfer: &Golfer) -> Self {
        Self {
            golfer_id: golfer.golfer_id,
            first_name: golfer.first_name.clone(),
            last_name: golfer.last_name.clone(),
            username: golfer.username.clone(),
            email: golfer.email.clone(),
            handicap: golfer.handicap,
            golfer_age: golfer.golfer_age,
            phone: golfer.phone.clone(),
            city: golfer.city.clone(),
            district: golfer.district.clone(),
            country: golfer.country.clone(),
            right_handed: golfer.right_handed,
            alcohol: golfer.alcohol,
            legal_drugs: golfer.legal_drugs,
            smoker: golfer.smoker,
            gambler: golfer.gambler,
            music: golfer.music,
            tees: golfer.tees.clone(),
        }
    }
}

// ============================================================================
// Course Responses
// ============================================================================

/// Course snapshot
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
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

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.course_id,
            course_name: course.course_name.clone(),
            address: course.address.clone(),
            city: course.city.clone(),
            district: course.district.clone(),
            country: course.country.clone(),
            weekday_price: course.weekday_price,
            weekend_price: course.weekend_price,
            strict_dress: course.strict_dress,
            rating: course.rating,
            slope: course.slope,
            course_length: course.course_length,
            par: course.par,
            designer: course.designer.clone(),
        }
    }
}

// ============================================================================
// Teetime Responses
// ============================================================================

/// Teetime snapshot with embedded course, owner, and comments
#[derive(Debug, Serialize)]
pub struct TeetimeResponse {
    pub teetime_id: i64,
    pub course_name: String,
    pub course_details: Option<CourseResponse>,
    pub price: i64,
    pub teetime_date: String,
    pub teetime_time: String,
    pub space_remaining: i64,
    pub golfer: GolferResponse,
    pub golfer_comments: Vec<CommentResponse>,
}

impl TeetimeResponse {
    /// Assemble the snapshot from the teetime row and its relations.
    pub fn assemble(
        teetime: &Teetime,
        owner: &Golfer,
        course: Option<&Course>,
        comments: Vec<CommentResponse>,
    ) -> Self {
        Self {
            teetime_id: teetime.teetime_id,
            course_name: teetime.course_name.clone(),
            course_details: course.map(CourseResponse::from),
            price: teetime.price,
            teetime_date: teetime.teetime_date.clone(),
            teetime_time: teetime.teetime_time.clone(),
            space_remaining: teetime.space_remaining,
            golfer: GolferResponse::from(owner),
            golfer_comments: comments,
        }
    }
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment snapshot with embedded author
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub golfer_comment_id: i64,
    pub body: String,
    pub teetime_id: i64,
    pub golfer: GolferResponse,
}

impl CommentResponse {
    /// Assemble the snapshot from the comment row and its author.
    pub fn assemble(comment: &GolferComment, author: &Golfer) -> Self {
        Self {
            golfer_comment_id: comment.golfer_comment_id,
            body: comment.body.clone(),
            teetime_id: comment.teetime_id,
            golfer: GolferResponse::from(author),
        }
    }
}

//! Request and response DTOs

pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateCourseRequest, CreateTeetimeRequest, RegisterGolferRequest,
    UpdateCourseRequest, UpdateGolferRequest, UpdateTeetimeRequest,
};
pub use responses::{
    CommentResponse, CourseResponse, GolferResponse, SuccessResponse, TeetimeResponse,
    TokenResponse,
};

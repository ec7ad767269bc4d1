//! # fairway-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CommentResponse, CourseResponse, CreateCommentRequest, CreateCourseRequest,
    CreateTeetimeRequest, GolferResponse, RegisterGolferRequest, SuccessResponse, TeetimeResponse,
    TokenResponse, UpdateCourseRequest, UpdateGolferRequest, UpdateTeetimeRequest,
};
pub use services::{
    AuthService, CommentService, CourseService, GolferService, ServiceContext, ServiceError,
    ServiceResult, TeetimeService,
};

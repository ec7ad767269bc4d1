//! Request handlers organized by resource

pub mod auth;
pub mod comments;
pub mod courses;
pub mod golfers;
pub mod health;
pub mod teetimes;

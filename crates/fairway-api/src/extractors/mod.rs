//! Axum extractors for request handling
//!
//! Custom extractors for authentication and JSON body handling.

mod auth;
mod json;

pub use auth::{AuthGolfer, BasicAuthGolfer};
pub use json::{StrictJson, ValidatedJson};

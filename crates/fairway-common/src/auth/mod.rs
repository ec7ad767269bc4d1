//! Authentication primitives
//!
//! Password hashing and opaque session token generation. Verification
//! against stored state lives in the service layer.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::{generate_token, IssuedToken};

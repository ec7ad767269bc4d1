//! # fairway-db
//!
//! Persistence layer implementing the `fairway-core` repository traits with
//! SQLite via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management (any `sqlite://` connection string; the
//!   default is a local file-backed database)
//! - Initial schema creation with foreign keys and cascade rules
//! - Database models with SQLx `FromRow` derives and entity conversions
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fairway_db::pool::{create_pool, DatabaseConfig};
//! use fairway_db::SqliteGolferRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     fairway_db::schema::init_schema(&pool).await?;
//!     let golfer_repo = SqliteGolferRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, DbPool};
pub use repositories::{
    SqliteCommentRepository, SqliteCourseRepository, SqliteGolferRepository,
    SqliteTeetimeRepository,
};
pub use schema::init_schema;

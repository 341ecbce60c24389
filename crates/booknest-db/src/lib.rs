//! # booknest-db
//!
//! PostgreSQL implementations of the repository traits defined in `booknest-core`.
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use booknest_db::{create_pool, run_migrations, DatabaseConfig, PgFavoriteRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let favorites = PgFavoriteRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgBookRepository, PgCategoryRepository, PgCommentRepository, PgFavoriteRepository,
    PgReactionRepository,
};

//! # booknest-cache
//!
//! Redis caching for the book catalog.
//!
//! - **Connection Pool**: managed Redis connection pool with deadpool
//! - **Catalog Cache**: read-through cache for the front page and single books,
//!   invalidated on every catalog write
//!
//! ## Example
//!
//! ```ignore
//! use booknest_cache::{BookCache, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cache = BookCache::with_ttl(pool, 300);
//!
//! if let Some(books) = cache.get_front_page().await? {
//!     return Ok(books);
//! }
//! ```

pub mod catalog;
pub mod pool;

pub use catalog::{BookCache, CachedBook, CATALOG_PREFIX};
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

//! Catalog cache

mod book_cache;

pub use book_cache::{BookCache, CachedBook, CATALOG_PREFIX};

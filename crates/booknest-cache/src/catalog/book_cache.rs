//! Read-through cache for catalog reads.
//!
//! Holds the unfiltered first page of the catalog and individual books. Any
//! write to the catalog drops the affected keys; entries also expire on a TTL.

use booknest_core::entities::Book;
use booknest_core::value_objects::{BookId, CategoryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pool::{RedisPool, RedisResult};

/// Key prefix shared by every catalog entry
pub const CATALOG_PREFIX: &str = "catalog:";

/// Default TTL for catalog entries (5 minutes)
const DEFAULT_CATALOG_TTL: u64 = 5 * 60;

/// `SCAN` batch size when clearing the catalog
const SCAN_COUNT: usize = 100;

/// Serialized form of a book in Redis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedBook {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Book> for CachedBook {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            cover_url: book.cover_url.clone(),
            category_id: book.category_id,
            published_year: book.published_year,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

impl From<CachedBook> for Book {
    fn from(cached: CachedBook) -> Self {
        Self {
            id: cached.id,
            title: cached.title,
            author: cached.author,
            description: cached.description,
            cover_url: cached.cover_url,
            category_id: cached.category_id,
            published_year: cached.published_year,
            created_at: cached.created_at,
            updated_at: cached.updated_at,
        }
    }
}

/// Catalog cache backed by Redis
#[derive(Clone, Debug)]
pub struct BookCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl BookCache {
    /// Create a cache with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self::with_ttl(pool, DEFAULT_CATALOG_TTL)
    }

    /// Create a cache with a custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    fn front_page_key() -> String {
        format!("{CATALOG_PREFIX}front_page")
    }

    fn book_key(id: BookId) -> String {
        format!("{CATALOG_PREFIX}book:{id}")
    }

    /// Cached first page of the catalog
    pub async fn get_front_page(&self) -> RedisResult<Option<Vec<Book>>> {
        let cached: Option<Vec<CachedBook>> = self.pool.get_value(&Self::front_page_key()).await?;
        Ok(cached.map(|books| books.into_iter().map(Book::from).collect()))
    }

    pub async fn set_front_page(&self, books: &[Book]) -> RedisResult<()> {
        let cached: Vec<CachedBook> = books.iter().map(CachedBook::from).collect();
        self.pool
            .set(&Self::front_page_key(), &cached, Some(self.ttl_seconds))
            .await?;

        tracing::debug!(books = cached.len(), "Cached catalog front page");
        Ok(())
    }

    /// Cached single book
    pub async fn get_book(&self, id: BookId) -> RedisResult<Option<Book>> {
        let cached: Option<CachedBook> = self.pool.get_value(&Self::book_key(id)).await?;
        Ok(cached.map(Book::from))
    }

    pub async fn set_book(&self, book: &Book) -> RedisResult<()> {
        self.pool
            .set(
                &Self::book_key(book.id),
                &CachedBook::from(book),
                Some(self.ttl_seconds),
            )
            .await
    }

    /// Drop one book and the front page it may appear on
    pub async fn invalidate_book(&self, id: BookId) -> RedisResult<()> {
        self.pool
            .delete_many(&[Self::book_key(id), Self::front_page_key()])
            .await?;

        tracing::debug!(book_id = %id, "Invalidated cached book");
        Ok(())
    }

    /// Drop only the front page, e.g. after a book is added
    pub async fn invalidate_front_page(&self) -> RedisResult<bool> {
        self.pool.delete(&Self::front_page_key()).await
    }

    /// Drop every catalog entry. Used when a write touches many books at once.
    pub async fn clear(&self) -> RedisResult<i32> {
        let keys = self
            .pool
            .scan_keys(&format!("{CATALOG_PREFIX}*"), SCAN_COUNT)
            .await?;
        let deleted = self.pool.delete_many(&keys).await?;

        tracing::info!(deleted, "Cleared catalog cache");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: BookId::new(42),
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            description: None,
            cover_url: Some("https://covers.example.com/42.jpg".to_string()),
            category_id: Some(CategoryId::new(3)),
            published_year: Some(1969),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_keys_share_prefix() {
        assert_eq!(BookCache::book_key(BookId::new(42)), "catalog:book:42");
        assert!(BookCache::front_page_key().starts_with(CATALOG_PREFIX));
    }

    #[test]
    fn test_cached_book_json_shape() {
        let book = sample_book();
        let json = serde_json::to_value(CachedBook::from(&book)).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["category_id"], 3);
        assert!(json["description"].is_null());

        let restored: CachedBook = serde_json::from_value(json).unwrap();
        assert_eq!(Book::from(restored), book);
    }
}

//! PostgreSQL implementation of BookRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booknest_core::entities::{Book, NewBook};
use booknest_core::error::DomainError;
use booknest_core::traits::{BookQuery, BookRepository, RepoResult};
use booknest_core::value_objects::{BookId, CategoryId};

use crate::mappers::{BookInsert, BookUpdate};
use crate::models::BookModel;

use super::error::{like_pattern, map_db_error, map_foreign_key_violation};

const BOOK_COLUMNS: &str = "id, title, author, description, cover_url, category_id, \
                            published_year, created_at, updated_at";

/// PostgreSQL implementation of BookRepository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    /// Create a new PgBookRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: BookId) -> RepoResult<Option<Book>> {
        let result = sqlx::query_as::<_, BookModel>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Book::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, query: &BookQuery) -> RepoResult<Vec<Book>> {
        let limit = query.limit.clamp(1, BookQuery::MAX_LIMIT);
        let offset = query.offset.max(0);
        let pattern = query.search.as_deref().map(like_pattern);

        let results = sqlx::query_as::<_, BookModel>(&format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE ($1::BIGINT IS NULL OR category_id = $1)
              AND ($2::TEXT IS NULL OR title ILIKE $2 OR author ILIKE $2)
            ORDER BY title, id
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(query.category_id.map(CategoryId::into_inner))
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Book::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: BookId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, book), fields(title = %book.title))]
    async fn create(&self, book: &NewBook) -> RepoResult<Book> {
        let insert = BookInsert::new(book);

        let model = sqlx::query_as::<_, BookModel>(&format!(
            r#"
            INSERT INTO books (title, author, description, cover_url, category_id, published_year)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(insert.title)
        .bind(insert.author)
        .bind(insert.description)
        .bind(insert.cover_url)
        .bind(insert.category_id)
        .bind(insert.published_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || {
                DomainError::CategoryNotFound(CategoryId::new(insert.category_id.unwrap_or_default()))
            })
        })?;

        Ok(Book::from(model))
    }

    #[instrument(skip(self, book), fields(book_id = %book.id))]
    async fn update(&self, book: &Book) -> RepoResult<()> {
        let update = BookUpdate::new(book);

        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, description = $4, cover_url = $5,
                category_id = $6, published_year = $7, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(update.id)
        .bind(update.title)
        .bind(update.author)
        .bind(update.description)
        .bind(update.cover_url)
        .bind(update.category_id)
        .bind(update.published_year)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || {
                DomainError::CategoryNotFound(CategoryId::new(update.category_id.unwrap_or_default()))
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BookNotFound(book.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: BookId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

//! PostgreSQL implementation of FavoriteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booknest_core::entities::{Book, Favorite};
use booknest_core::error::DomainError;
use booknest_core::traits::{FavoriteRepository, RepoResult};
use booknest_core::value_objects::{BookId, UserId};

use crate::models::BookModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    /// Create a new PgFavoriteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: UserId, book_id: BookId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND book_id = $2)",
        )
        .bind(user_id.into_inner())
        .bind(book_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, favorite), fields(user_id = %favorite.user_id, book_id = %favorite.book_id))]
    async fn create(&self, favorite: &Favorite) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO favorites (user_id, book_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, book_id) DO NOTHING
            "#,
        )
        .bind(favorite.user_id.into_inner())
        .bind(favorite.book_id.into_inner())
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::BookNotFound(favorite.book_id)))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: UserId, book_id: BookId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND book_id = $2")
            .bind(user_id.into_inner())
            .bind(book_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_books_by_user(&self, user_id: UserId) -> RepoResult<Vec<Book>> {
        let results = sqlx::query_as::<_, BookModel>(
            r#"
            SELECT b.id, b.title, b.author, b.description, b.cover_url, b.category_id,
                   b.published_year, b.created_at, b.updated_at
            FROM favorites f
            INNER JOIN books b ON b.id = f.book_id
            WHERE f.user_id = $1
            ORDER BY f.seq
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Book::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_book(&self, book_id: BookId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorites WHERE book_id = $1")
            .bind(book_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

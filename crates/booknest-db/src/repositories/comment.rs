//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booknest_core::entities::{Comment, NewComment};
use booknest_core::error::DomainError;
use booknest_core::traits::{CommentRepository, RepoResult};
use booknest_core::value_objects::{BookId, CommentId};

use crate::mappers::CommentInsert;
use crate::models::CommentModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            "SELECT id, book_id, user_id, body, created_at FROM comments WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_book(&self, book_id: BookId) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, book_id, user_id, body, created_at
            FROM comments
            WHERE book_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(book_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(book_id = %comment.book_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let insert = CommentInsert::new(comment);

        let model = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (book_id, user_id, body)
            VALUES ($1, $2, $3)
            RETURNING id, book_id, user_id, body, created_at
            "#,
        )
        .bind(insert.book_id)
        .bind(insert.user_id)
        .bind(insert.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::BookNotFound(comment.book_id)))?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

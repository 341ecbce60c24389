//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booknest_core::entities::CommentReaction;
use booknest_core::error::DomainError;
use booknest_core::traits::{ReactionRepository, RepoResult};
use booknest_core::value_objects::{CommentId, UserId};

use crate::mappers::ReactionInsert;
use crate::models::CommentReactionModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, comment_ids), fields(comments = comment_ids.len()))]
    async fn find_by_comments(&self, comment_ids: &[CommentId]) -> RepoResult<Vec<CommentReaction>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = comment_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, CommentReactionModel>(
            r#"
            SELECT comment_id, user_id, kind, created_at
            FROM comment_reactions
            WHERE comment_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentReaction::from).collect())
    }

    #[instrument(skip(self, reaction), fields(comment_id = %reaction.comment_id, kind = %reaction.kind))]
    async fn upsert(&self, reaction: &CommentReaction) -> RepoResult<()> {
        let insert = ReactionInsert::new(reaction);

        sqlx::query(
            r#"
            INSERT INTO comment_reactions (comment_id, user_id, kind, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (comment_id, user_id) DO UPDATE SET kind = EXCLUDED.kind
            "#,
        )
        .bind(insert.comment_id)
        .bind(insert.user_id)
        .bind(insert.kind)
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::CommentNotFound(reaction.comment_id))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> RepoResult<bool> {
        let result =
            sqlx::query("DELETE FROM comment_reactions WHERE comment_id = $1 AND user_id = $2")
                .bind(comment_id.into_inner())
                .bind(user_id.into_inner())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

//! Comment and reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub book_id: i64,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for comment_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct CommentReactionModel {
    pub comment_id: i64,
    pub user_id: Uuid,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

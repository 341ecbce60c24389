//! Book database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for books table
#[derive(Debug, Clone, FromRow)]
pub struct BookModel {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub category_id: Option<i64>,
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

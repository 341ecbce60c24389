//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Catalog Responses
// ============================================================================

/// Book response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
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

/// Category response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Favorite Responses
// ============================================================================

/// Whether the caller has favorited a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteStatusResponse {
    pub book_id: i64,
    pub favorite: bool,
}

/// Outcome of a favorite toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleFavoriteResponse {
    pub book_id: i64,
    /// `true` if the book is now a favorite, `false` if it was removed
    pub added: bool,
}

/// Number of users who favorited a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteCountResponse {
    pub book_id: i64,
    pub count: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment with its reaction tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub book_id: i64,
    pub user_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Count per reaction kind; kinds nobody used are absent
    pub reaction_counts: BTreeMap<String, i64>,
    /// The viewer's own reaction kind, `null` when anonymous or not reacted
    pub viewer_reaction: Option<String>,
}

/// The caller's reaction on a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionResponse {
    pub comment_id: i64,
    pub kind: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let status = |healthy: bool| if healthy { "healthy" } else { "unhealthy" }.to_string();
        Self {
            status: if database_healthy && redis_healthy {
                "ready"
            } else {
                "not_ready"
            }
            .to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: status(database_healthy),
                redis: status(redis_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

//! Favorite entity - a user's bookmark on a book

use chrono::{DateTime, Utc};

use crate::value_objects::{BookId, UserId};

/// Favorite relationship. At most one exists per (user, book) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub user_id: UserId,
    pub book_id: BookId,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Create a new Favorite stamped with the current time
    pub fn new(user_id: UserId, book_id: BookId) -> Self {
        Self {
            user_id,
            book_id,
            created_at: Utc::now(),
        }
    }
}

//! Comment entities - reader comments on a book and reactions to them

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::value_objects::{BookId, CommentId, ReactionKind, UserId};

/// Maximum comment body length in characters
pub const MAX_COMMENT_LEN: usize = 2000;

/// Comment entity. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub book_id: BookId,
    pub user_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Check if the given user wrote this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Values for inserting a comment; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub book_id: BookId,
    pub user_id: UserId,
    pub body: String,
}

/// A user's reaction to a comment. At most one per (comment, user).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReaction {
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl CommentReaction {
    /// Create a new CommentReaction
    pub fn new(comment_id: CommentId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            comment_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Comment with its reactions tallied for a particular viewer.
///
/// Computed on read, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedComment {
    pub comment: Comment,
    /// Count per reaction kind; kinds with no rows are absent
    pub reaction_counts: BTreeMap<ReactionKind, i64>,
    /// The viewer's own reaction, if any
    pub viewer_reaction: Option<ReactionKind>,
}

impl TransformedComment {
    /// Total reactions across all kinds
    pub fn total_reactions(&self) -> i64 {
        self.reaction_counts.values().sum()
    }

    /// Count for a single kind (zero when absent)
    pub fn count_of(&self, kind: &str) -> i64 {
        self.reaction_counts
            .iter()
            .find(|(k, _)| k.as_str() == kind)
            .map_or(0, |(_, count)| *count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_is_authored_by() {
        let author = UserId::new(Uuid::new_v4());
        let comment = Comment {
            id: CommentId::new(1),
            book_id: BookId::new(1),
            user_id: author,
            body: "Loved it".to_string(),
            created_at: Utc::now(),
        };
        assert!(comment.is_authored_by(author));
        assert!(!comment.is_authored_by(UserId::new(Uuid::new_v4())));
    }

    #[test]
    fn test_count_of() {
        let comment = Comment {
            id: CommentId::new(1),
            book_id: BookId::new(1),
            user_id: UserId::new(Uuid::new_v4()),
            body: "Loved it".to_string(),
            created_at: Utc::now(),
        };
        let mut counts = BTreeMap::new();
        counts.insert(ReactionKind::like(), 3);
        counts.insert(ReactionKind::dislike(), 1);
        let transformed = TransformedComment {
            comment,
            reaction_counts: counts,
            viewer_reaction: None,
        };

        assert_eq!(transformed.count_of("like"), 3);
        assert_eq!(transformed.count_of("laugh"), 0);
        assert_eq!(transformed.total_reactions(), 4);
    }
}

//! Comment and reaction entity <-> model mappers

use booknest_core::entities::{Comment, CommentReaction, NewComment};
use booknest_core::value_objects::{BookId, CommentId, ReactionKind, UserId};
use uuid::Uuid;

use crate::models::{CommentModel, CommentReactionModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            book_id: BookId::new(model.book_id),
            user_id: UserId::new(model.user_id),
            body: model.body,
            created_at: model.created_at,
        }
    }
}

impl From<CommentReactionModel> for CommentReaction {
    fn from(model: CommentReactionModel) -> Self {
        CommentReaction {
            comment_id: CommentId::new(model.comment_id),
            user_id: UserId::new(model.user_id),
            // Stored kinds are returned as-is, even ones the API no longer accepts
            kind: ReactionKind::from_stored(model.kind),
            created_at: model.created_at,
        }
    }
}

/// Bind values for inserting a comment
pub struct CommentInsert<'a> {
    pub book_id: i64,
    pub user_id: Uuid,
    pub body: &'a str,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a NewComment) -> Self {
        Self {
            book_id: comment.book_id.into_inner(),
            user_id: comment.user_id.into_inner(),
            body: &comment.body,
        }
    }
}

/// Bind values for upserting a reaction
pub struct ReactionInsert<'a> {
    pub comment_id: i64,
    pub user_id: Uuid,
    pub kind: &'a str,
}

impl<'a> ReactionInsert<'a> {
    pub fn new(reaction: &'a CommentReaction) -> Self {
        Self {
            comment_id: reaction.comment_id.into_inner(),
            user_id: reaction.user_id.into_inner(),
            kind: reaction.kind.as_str(),
        }
    }
}

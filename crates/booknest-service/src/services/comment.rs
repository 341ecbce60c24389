//! Comment service
//!
//! Comments on books and the reactions users leave on them. Listing runs the
//! stored rows through [`booknest_core::aggregate`] so every comment carries
//! its reaction tally and the viewer's own reaction.

use std::collections::BTreeMap;

use booknest_core::entities::{CommentReaction, NewComment, TransformedComment, MAX_COMMENT_LEN};
use booknest_core::{aggregate, BookId, CommentId, DomainError, ReactionKind, UserId};
use tracing::{debug, info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest, ReactionResponse, SetReactionRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comments of a book, oldest first, with reaction tallies.
    ///
    /// An unknown book simply has no comments.
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        book_id: &str,
        viewer_id: Option<&str>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let book_id = BookId::parse(book_id)?;
        let viewer_id = viewer_id.map(UserId::parse).transpose()?;

        let comments = self.ctx.comment_repo().find_by_book(book_id).await?;
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<CommentId> = comments.iter().map(|c| c.id).collect();
        let reactions = self.ctx.reaction_repo().find_by_comments(&ids).await?;

        debug!(
            comments = comments.len(),
            reactions = reactions.len(),
            "Aggregating comment reactions"
        );

        Ok(aggregate(comments, &reactions, viewer_id)
            .into_iter()
            .map(CommentResponse::from)
            .collect())
    }

    /// Post a comment on a book
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        book_id: &str,
        user_id: &str,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let book_id = BookId::parse(book_id)?;
        let user_id = UserId::parse(user_id)?;

        let body = request.body.trim();
        if body.is_empty() {
            return Err(DomainError::ValidationError("comment body is required".to_string()).into());
        }
        if body.chars().count() > MAX_COMMENT_LEN {
            return Err(DomainError::ContentTooLong {
                max: MAX_COMMENT_LEN,
            }
            .into());
        }

        if !self.ctx.book_repo().exists(book_id).await? {
            return Err(DomainError::BookNotFound(book_id).into());
        }

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                book_id,
                user_id,
                body: body.to_string(),
            })
            .await?;

        info!(comment_id = %comment.id, book_id = %book_id, user_id = %user_id, "Comment created");

        // A fresh comment has no reactions yet
        Ok(CommentResponse::from(TransformedComment {
            comment,
            reaction_counts: BTreeMap::new(),
            viewer_reaction: None,
        }))
    }

    /// Delete a comment. Only its author may do so.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: &str, user_id: &str) -> ServiceResult<()> {
        let comment_id = CommentId::parse(comment_id)?;
        let user_id = UserId::parse(user_id)?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_authored_by(user_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        if !self.ctx.comment_repo().delete(comment_id).await? {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        info!(comment_id = %comment_id, user_id = %user_id, "Comment deleted");
        Ok(())
    }

    /// Create or replace the caller's reaction on a comment
    #[instrument(skip(self, request))]
    pub async fn set_reaction(
        &self,
        comment_id: &str,
        user_id: &str,
        request: SetReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let comment_id = CommentId::parse(comment_id)?;
        let user_id = UserId::parse(user_id)?;
        let kind = ReactionKind::parse(&request.kind).map_err(DomainError::InvalidReactionKind)?;

        if self.ctx.comment_repo().find_by_id(comment_id).await?.is_none() {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        self.ctx
            .reaction_repo()
            .upsert(&CommentReaction::new(comment_id, user_id, kind.clone()))
            .await?;

        info!(comment_id = %comment_id, user_id = %user_id, kind = %kind, "Reaction set");

        Ok(ReactionResponse {
            comment_id: comment_id.into_inner(),
            kind: kind.into_inner(),
        })
    }

    /// Remove the caller's reaction. Removing an absent reaction succeeds.
    #[instrument(skip(self))]
    pub async fn remove_reaction(&self, comment_id: &str, user_id: &str) -> ServiceResult<()> {
        let comment_id = CommentId::parse(comment_id)?;
        let user_id = UserId::parse(user_id)?;

        let removed = self.ctx.reaction_repo().delete(comment_id, user_id).await?;

        if removed {
            info!(comment_id = %comment_id, user_id = %user_id, "Reaction removed");
        }
        Ok(())
    }
}

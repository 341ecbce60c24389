//! Favorite service
//!
//! Bookmarks between users and books: point queries, the toggle, a user's
//! favorite list and per-book counts.
//!
//! The toggle is check-then-act. Two concurrent toggles for the same pair can
//! both observe "absent" (or both "present"); the insert ignores conflicts, so
//! the worst outcome is one request reporting a state the other immediately
//! reverts. No duplicate row can be created.

use booknest_core::entities::Favorite;
use booknest_core::{BookId, UserId};
use tracing::{info, instrument};

use crate::dto::{BookResponse, FavoriteCountResponse, FavoriteStatusResponse, ToggleFavoriteResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether the user has favorited the book
    #[instrument(skip(self))]
    pub async fn is_favorite(
        &self,
        user_id: &str,
        book_id: &str,
    ) -> ServiceResult<FavoriteStatusResponse> {
        let user_id = UserId::parse(user_id)?;
        let book_id = BookId::parse(book_id)?;

        let favorite = self.ctx.favorite_repo().exists(user_id, book_id).await?;

        Ok(FavoriteStatusResponse {
            book_id: book_id.into_inner(),
            favorite,
        })
    }

    /// Flip the favorite state of (user, book)
    #[instrument(skip(self))]
    pub async fn toggle_favorite(
        &self,
        user_id: &str,
        book_id: &str,
    ) -> ServiceResult<ToggleFavoriteResponse> {
        let user_id = UserId::parse(user_id)?;
        let book_id = BookId::parse(book_id)?;
        let repo = self.ctx.favorite_repo();

        let added = if repo.exists(user_id, book_id).await? {
            repo.delete(user_id, book_id).await?;
            false
        } else {
            // A concurrent insert may win; the pair is present either way
            repo.create(&Favorite::new(user_id, book_id)).await?;
            true
        };

        info!(user_id = %user_id, book_id = %book_id, added, "Favorite toggled");

        Ok(ToggleFavoriteResponse {
            book_id: book_id.into_inner(),
            added,
        })
    }

    /// Books the user has favorited, oldest favorite first
    #[instrument(skip(self))]
    pub async fn get_favorite_books(&self, user_id: &str) -> ServiceResult<Vec<BookResponse>> {
        let user_id = UserId::parse(user_id)?;

        let books = self.ctx.favorite_repo().find_books_by_user(user_id).await?;

        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    /// Number of users who favorited the book; 0 for unknown books
    #[instrument(skip(self))]
    pub async fn count_book_favorites(&self, book_id: &str) -> ServiceResult<FavoriteCountResponse> {
        let book_id = BookId::parse(book_id)?;

        let count = self.ctx.favorite_repo().count_by_book(book_id).await?;

        Ok(FavoriteCountResponse {
            book_id: book_id.into_inner(),
            count,
        })
    }
}

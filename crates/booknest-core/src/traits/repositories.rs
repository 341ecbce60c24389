//! Repository traits (ports) - define the interface for data access
//!
//! Each trait covers one table of the row store. The domain layer defines what
//! it needs, and the infrastructure layer provides the implementation. Every
//! method is a single statement against the store; none of them open a
//! transaction.

use async_trait::async_trait;

use crate::entities::{Book, Category, Comment, CommentReaction, Favorite, NewBook, NewComment};
use crate::error::DomainError;
use crate::value_objects::{BookId, CategoryId, CommentId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Book Repository
// ============================================================================

/// Filter and paging options for catalog queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    pub category_id: Option<CategoryId>,
    /// Case-insensitive match on title or author
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl BookQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Check if this is the unfiltered first page of the catalog
    pub fn is_front_page(&self) -> bool {
        self.category_id.is_none()
            && self.search.is_none()
            && self.offset == 0
            && self.limit == Self::DEFAULT_LIMIT
    }
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            search: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find book by ID
    async fn find_by_id(&self, id: BookId) -> RepoResult<Option<Book>>;

    /// List books ordered by title
    async fn find_all(&self, query: &BookQuery) -> RepoResult<Vec<Book>>;

    /// Check if a book exists
    async fn exists(&self, id: BookId) -> RepoResult<bool>;

    /// Insert a book and return the stored row
    async fn create(&self, book: &NewBook) -> RepoResult<Book>;

    /// Persist all mutable fields of an existing book
    async fn update(&self, book: &Book) -> RepoResult<()>;

    /// Delete a book; returns false when nothing was deleted
    async fn delete(&self, id: BookId) -> RepoResult<bool>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Category>>;

    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;

    /// Insert a category and return the stored row
    async fn create(&self, name: &str) -> RepoResult<Category>;

    /// Delete a category; returns false when nothing was deleted
    async fn delete(&self, id: CategoryId) -> RepoResult<bool>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Check if the (user, book) pair exists
    async fn exists(&self, user_id: UserId, book_id: BookId) -> RepoResult<bool>;

    /// Insert a favorite. Returns false if the pair already existed.
    async fn create(&self, favorite: &Favorite) -> RepoResult<bool>;

    /// Delete a favorite. Returns false if the pair did not exist.
    async fn delete(&self, user_id: UserId, book_id: BookId) -> RepoResult<bool>;

    /// Books favorited by a user, in the order the favorites were created
    async fn find_books_by_user(&self, user_id: UserId) -> RepoResult<Vec<Book>>;

    /// Number of users who favorited a book
    async fn count_by_book(&self, book_id: BookId) -> RepoResult<i64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// List comments on a book, oldest first
    async fn find_by_book(&self, book_id: BookId) -> RepoResult<Vec<Comment>>;

    /// Insert a comment and return the stored row
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Delete a comment; returns false when nothing was deleted
    async fn delete(&self, id: CommentId) -> RepoResult<bool>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// All reactions on any of the given comments
    async fn find_by_comments(&self, comment_ids: &[CommentId]) -> RepoResult<Vec<CommentReaction>>;

    /// Create the user's reaction or replace its kind
    async fn upsert(&self, reaction: &CommentReaction) -> RepoResult<()>;

    /// Remove the user's reaction; returns false if there was none
    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> RepoResult<bool>;
}

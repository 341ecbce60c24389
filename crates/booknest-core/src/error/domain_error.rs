//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{BookId, CategoryId, CommentId, IdError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction kind: {0}")]
    InvalidReactionKind(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not comment author")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Category already exists: {0}")]
    CategoryAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::BookNotFound(_) => "UNKNOWN_BOOK",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Conflict
            Self::CategoryAlreadyExists(_) => "CATEGORY_ALREADY_EXISTS",

            // Infrastructure
            Self::PersistenceError(_) => "PERSISTENCE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BookNotFound(_) | Self::CategoryNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidReactionKind(_) | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::CategoryAlreadyExists(_))
    }

    /// Check if the persistence gateway failed
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::PersistenceError(_))
    }
}

impl From<IdError> for DomainError {
    fn from(err: IdError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`; the API layer rejects
//! invalid bodies before a service runs.

use serde::Deserialize;
use validator::Validate;

use booknest_core::entities::{BookChanges, NewBook};
use booknest_core::value_objects::CategoryId;

// ============================================================================
// Book Requests
// ============================================================================

/// Catalog listing query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBooksQuery {
    /// Raw category id; parsed by the service
    pub category_id: Option<String>,
    /// Case-insensitive match on title or author
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Author must be 1-200 characters"))]
    pub author: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Cover URL must be a valid URL"))]
    pub cover_url: Option<String>,

    #[validate(range(min = 1, message = "Invalid category id"))]
    pub category_id: Option<i64>,

    #[validate(range(min = 0, max = 2100, message = "Published year must be 0-2100"))]
    pub published_year: Option<i32>,
}

impl From<CreateBookRequest> for NewBook {
    fn from(req: CreateBookRequest) -> Self {
        Self {
            title: req.title.trim().to_string(),
            author: req.author.trim().to_string(),
            description: req.description,
            cover_url: req.cover_url,
            category_id: req.category_id.map(CategoryId::new),
            published_year: req.published_year,
        }
    }
}

/// Partial book update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Author must be 1-200 characters"))]
    pub author: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Cover URL must be a valid URL"))]
    pub cover_url: Option<String>,

    #[validate(range(min = 1, message = "Invalid category id"))]
    pub category_id: Option<i64>,

    #[validate(range(min = 0, max = 2100, message = "Published year must be 0-2100"))]
    pub published_year: Option<i32>,
}

impl From<UpdateBookRequest> for BookChanges {
    fn from(req: UpdateBookRequest) -> Self {
        Self {
            title: req.title.map(|t| t.trim().to_string()),
            author: req.author.map(|a| a.trim().to_string()),
            description: req.description,
            cover_url: req.cover_url,
            category_id: req.category_id.map(CategoryId::new),
            published_year: req.published_year,
        }
    }
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request. The body is trimmed before its length is enforced.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub body: String,
}

/// Set (or replace) the caller's reaction on a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetReactionRequest {
    #[validate(length(min = 1, max = 32, message = "Reaction kind must be 1-32 characters"))]
    pub kind: String,
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

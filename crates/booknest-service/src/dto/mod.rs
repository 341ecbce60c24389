//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with `validator` rules for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from domain entities to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ContactRequest, CreateBookRequest, CreateCategoryRequest, CreateCommentRequest,
    ListBooksQuery, SetReactionRequest, UpdateBookRequest,
};

pub use responses::{
    BookResponse, CategoryResponse, CommentResponse, FavoriteCountResponse,
    FavoriteStatusResponse, HealthChecks, HealthResponse, ReactionResponse, ReadinessResponse,
    ToggleFavoriteResponse,
};

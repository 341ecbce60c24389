//! Route definitions
//!
//! API routes are mounted under /api/v1. Health routes are kept separate so
//! they bypass rate limiting.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{books, categories, comments, contact, favorites, health};
use crate::state::AppState;

/// API router (without health routes)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(book_routes())
        .merge(favorite_routes())
        .merge(comment_routes())
        .merge(category_routes())
        .route("/contact", post(contact::send_contact_message))
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:book_id",
            get(books::get_book)
                .patch(books::update_book)
                .delete(books::delete_book),
        )
}

fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books/:book_id/favorite",
            get(favorites::get_favorite_status).post(favorites::toggle_favorite),
        )
        .route(
            "/books/:book_id/favorites/count",
            get(favorites::count_favorites),
        )
        .route("/users/@me/favorites", get(favorites::get_my_favorites))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books/:book_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/comments/:comment_id", delete(comments::delete_comment))
        .route(
            "/comments/:comment_id/reactions/@me",
            put(comments::set_reaction).delete(comments::remove_reaction),
        )
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:category_id",
            delete(categories::delete_category),
        )
}

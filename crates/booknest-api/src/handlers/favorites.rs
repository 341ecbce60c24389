//! Favorite handlers

use axum::{
    extract::{Path, State},
    Json,
};
use booknest_service::dto::{
    BookResponse, FavoriteCountResponse, FavoriteStatusResponse, ToggleFavoriteResponse,
};
use booknest_service::FavoriteService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Whether the caller has favorited the book
///
/// GET /books/{book_id}/favorite
pub async fn get_favorite_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<String>,
) -> ApiResult<Json<FavoriteStatusResponse>> {
    let service = FavoriteService::new(state.service_context());
    let status = service.is_favorite(&auth.id(), &book_id).await?;
    Ok(Json(status))
}

/// Toggle the caller's favorite
///
/// POST /books/{book_id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<String>,
) -> ApiResult<Json<ToggleFavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let outcome = service.toggle_favorite(&auth.id(), &book_id).await?;
    Ok(Json(outcome))
}

/// Number of users who favorited the book
///
/// GET /books/{book_id}/favorites/count
pub async fn count_favorites(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<FavoriteCountResponse>> {
    let service = FavoriteService::new(state.service_context());
    let count = service.count_book_favorites(&book_id).await?;
    Ok(Json(count))
}

/// The caller's favorite books
///
/// GET /users/@me/favorites
pub async fn get_my_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BookResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let books = service.get_favorite_books(&auth.id()).await?;
    Ok(Json(books))
}

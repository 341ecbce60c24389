//! Book handlers
//!
//! Catalog reads are public; writes need a signed-in user.

use axum::{
    extract::{Path, State},
    Json,
};
use booknest_service::dto::{BookResponse, CreateBookRequest, ListBooksQuery, UpdateBookRequest};
use booknest_service::BookService;

use crate::extractors::{ApiQuery, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List books
///
/// GET /books?category_id=&search=&limit=&offset=
pub async fn list_books(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListBooksQuery>,
) -> ApiResult<Json<Vec<BookResponse>>> {
    let service = BookService::new(state.service_context());
    let books = service.list_books(query).await?;
    Ok(Json(books))
}

/// Get book by ID
///
/// GET /books/{book_id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<BookResponse>> {
    let service = BookService::new(state.service_context());
    let book = service.get_book(&book_id).await?;
    Ok(Json(book))
}

/// Create book
///
/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBookRequest>,
) -> ApiResult<Created<Json<BookResponse>>> {
    tracing::debug!(user_id = %auth.user_id, "Creating book");

    let service = BookService::new(state.service_context());
    let book = service.create_book(request).await?;
    Ok(Created(Json(book)))
}

/// Update book
///
/// PATCH /books/{book_id}
pub async fn update_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBookRequest>,
) -> ApiResult<Json<BookResponse>> {
    tracing::debug!(user_id = %auth.user_id, book_id = %book_id, "Updating book");

    let service = BookService::new(state.service_context());
    let book = service.update_book(&book_id, request).await?;
    Ok(Json(book))
}

/// Delete book
///
/// DELETE /books/{book_id}
pub async fn delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<String>,
) -> ApiResult<NoContent> {
    tracing::debug!(user_id = %auth.user_id, book_id = %book_id, "Deleting book");

    let service = BookService::new(state.service_context());
    service.delete_book(&book_id).await?;
    Ok(NoContent)
}

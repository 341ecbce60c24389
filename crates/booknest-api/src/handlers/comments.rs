//! Comment and reaction handlers

use axum::{
    extract::{Path, State},
    Json,
};
use booknest_service::dto::{
    CommentResponse, CreateCommentRequest, ReactionResponse, SetReactionRequest,
};
use booknest_service::CommentService;

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comments of a book with reaction tallies
///
/// GET /books/{book_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(book_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let viewer_id = viewer.id();
    let comments = service.list_comments(&book_id, viewer_id.as_deref()).await?;
    Ok(Json(comments))
}

/// Post a comment
///
/// POST /books/{book_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create_comment(&book_id, &auth.id(), request).await?;
    Ok(Created(Json(comment)))
}

/// Delete own comment
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(&comment_id, &auth.id()).await?;
    Ok(NoContent)
}

/// Set or replace own reaction
///
/// PUT /comments/{comment_id}/reactions/@me
pub async fn set_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
    ValidatedJson(request): ValidatedJson<SetReactionRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    let service = CommentService::new(state.service_context());
    let reaction = service.set_reaction(&comment_id, &auth.id(), request).await?;
    Ok(Json(reaction))
}

/// Remove own reaction
///
/// DELETE /comments/{comment_id}/reactions/@me
pub async fn remove_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.remove_reaction(&comment_id, &auth.id()).await?;
    Ok(NoContent)
}

//! Category handlers

use axum::{
    extract::{Path, State},
    Json,
};
use booknest_service::dto::{CategoryResponse, CreateCategoryRequest};
use booknest_service::CategoryService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List categories
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Create category
///
/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let category = service.create_category(request).await?;
    Ok(Created(Json(category)))
}

/// Delete category
///
/// DELETE /categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(category_id): Path<String>,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.service_context());
    service.delete_category(&category_id).await?;
    Ok(NoContent)
}

//! Category service

use booknest_core::{CategoryId, DomainError};
use tracing::{info, instrument, warn};

use crate::dto::{CategoryResponse, CreateCategoryRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All categories ordered by name
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().find_all().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// Create a category. Names are unique ignoring case.
    #[instrument(skip(self, request))]
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError("category name is required".to_string()).into());
        }

        let category = self.ctx.category_repo().create(name).await?;

        info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(CategoryResponse::from(category))
    }

    /// Delete a category; its books become uncategorized
    #[instrument(skip(self))]
    pub async fn delete_category(&self, category_id: &str) -> ServiceResult<()> {
        let category_id = CategoryId::parse(category_id)?;

        if !self.ctx.category_repo().delete(category_id).await? {
            return Err(DomainError::CategoryNotFound(category_id).into());
        }

        info!(category_id = %category_id, "Category deleted");

        // Any cached book may have carried this category
        if let Some(cache) = self.ctx.book_cache() {
            if let Err(e) = cache.clear().await {
                warn!(error = %e, "Failed to clear catalog cache");
            }
        }

        Ok(())
    }
}

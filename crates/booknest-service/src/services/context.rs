//! Service context - dependency container for services
//!
//! Holds the repositories, the optional catalog cache and the optional mailer.
//! Nothing here is global: the server builds one context at start-up and
//! shares it behind an `Arc`.

use std::sync::Arc;

use booknest_cache::BookCache;
use booknest_core::traits::{
    BookRepository, CategoryRepository, CommentRepository, FavoriteRepository, ReactionRepository,
};

use crate::mail::Mailer;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    book_repo: Arc<dyn BookRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    /// Catalog cache; `None` reads straight from the repositories
    book_cache: Option<BookCache>,

    /// Contact-form delivery; `None` disables the contact form
    mailer: Option<Arc<dyn Mailer>>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn book_repo(&self) -> &dyn BookRepository {
        self.book_repo.as_ref()
    }

    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Optional collaborators ===

    pub fn book_cache(&self) -> Option<&BookCache> {
        self.book_cache.as_ref()
    }

    pub fn mailer(&self) -> Option<&dyn Mailer> {
        self.mailer.as_deref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("book_cache", &self.book_cache.is_some())
            .field("mailer", &self.mailer.is_some())
            .finish()
    }
}

/// Builder for [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    book_repo: Option<Arc<dyn BookRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    book_cache: Option<BookCache>,
    mailer: Option<Arc<dyn Mailer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book_repo(mut self, repo: Arc<dyn BookRepository>) -> Self {
        self.book_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn book_cache(mut self, cache: BookCache) -> Self {
        self.book_cache = Some(cache);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            book_repo: required(self.book_repo, "book_repo")?,
            category_repo: required(self.category_repo, "category_repo")?,
            favorite_repo: required(self.favorite_repo, "favorite_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            book_cache: self.book_cache,
            mailer: self.mailer,
        })
    }
}

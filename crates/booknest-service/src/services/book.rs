//! Book service - catalog reads and writes
//!
//! Reads go through the catalog cache when one is configured: the unfiltered
//! first page and single books. Every write invalidates the keys it touches.
//! The cache is an optimisation only; its failures are logged and the
//! repositories answer instead.

use booknest_core::entities::{BookChanges, NewBook};
use booknest_core::traits::BookQuery;
use booknest_core::{Book, BookId, CategoryId, DomainError};
use tracing::{debug, info, instrument, warn};

use crate::dto::{BookResponse, CreateBookRequest, ListBooksQuery, UpdateBookRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Book service
pub struct BookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List books ordered by title
    #[instrument(skip(self))]
    pub async fn list_books(&self, query: ListBooksQuery) -> ServiceResult<Vec<BookResponse>> {
        let query = book_query(query)?;

        if query.is_front_page() {
            if let Some(cache) = self.ctx.book_cache() {
                match cache.get_front_page().await {
                    Ok(Some(books)) => {
                        debug!(books = books.len(), "Front page served from cache");
                        return Ok(books.into_iter().map(BookResponse::from).collect());
                    }
                    Ok(None) => {}
                    Err(e) => warn!(error = %e, "Failed to read cached front page"),
                }
            }
        }

        let books = self.ctx.book_repo().find_all(&query).await?;

        if query.is_front_page() {
            if let Some(cache) = self.ctx.book_cache() {
                if let Err(e) = cache.set_front_page(&books).await {
                    warn!(error = %e, "Failed to cache front page");
                }
            }
        }

        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    /// Get a single book
    #[instrument(skip(self))]
    pub async fn get_book(&self, book_id: &str) -> ServiceResult<BookResponse> {
        let book_id = BookId::parse(book_id)?;

        if let Some(cache) = self.ctx.book_cache() {
            match cache.get_book(book_id).await {
                Ok(Some(book)) => return Ok(BookResponse::from(book)),
                Ok(None) => {}
                Err(e) => warn!(book_id = %book_id, error = %e, "Failed to read cached book"),
            }
        }

        let book = self.find_book(book_id).await?;

        if let Some(cache) = self.ctx.book_cache() {
            if let Err(e) = cache.set_book(&book).await {
                warn!(book_id = %book_id, error = %e, "Failed to cache book");
            }
        }

        Ok(BookResponse::from(book))
    }

    /// Add a book to the catalog
    #[instrument(skip(self, request))]
    pub async fn create_book(&self, request: CreateBookRequest) -> ServiceResult<BookResponse> {
        let new_book = NewBook::from(request);
        if new_book.title.is_empty() || new_book.author.is_empty() {
            return Err(DomainError::ValidationError("title and author are required".to_string()).into());
        }

        let book = self.ctx.book_repo().create(&new_book).await?;

        info!(book_id = %book.id, title = %book.title, "Book created");

        if let Some(cache) = self.ctx.book_cache() {
            if let Err(e) = cache.invalidate_front_page().await {
                warn!(error = %e, "Failed to invalidate cached front page");
            }
        }

        Ok(BookResponse::from(book))
    }

    /// Apply a partial update; unchanged books are not written
    #[instrument(skip(self, request))]
    pub async fn update_book(
        &self,
        book_id: &str,
        request: UpdateBookRequest,
    ) -> ServiceResult<BookResponse> {
        let book_id = BookId::parse(book_id)?;
        let changes = BookChanges::from(request);
        if changes.title.as_deref() == Some("") || changes.author.as_deref() == Some("") {
            return Err(DomainError::ValidationError("title and author cannot be blank".to_string()).into());
        }

        let mut book = self.find_book(book_id).await?;

        if book.apply(&changes) {
            self.ctx.book_repo().update(&book).await?;
            info!(book_id = %book_id, "Book updated");
            self.invalidate(book_id).await;
        }

        Ok(BookResponse::from(book))
    }

    /// Remove a book together with its favorites and comments
    #[instrument(skip(self))]
    pub async fn delete_book(&self, book_id: &str) -> ServiceResult<()> {
        let book_id = BookId::parse(book_id)?;

        if !self.ctx.book_repo().delete(book_id).await? {
            return Err(DomainError::BookNotFound(book_id).into());
        }

        info!(book_id = %book_id, "Book deleted");
        self.invalidate(book_id).await;
        Ok(())
    }

    async fn find_book(&self, book_id: BookId) -> ServiceResult<Book> {
        self.ctx
            .book_repo()
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| DomainError::BookNotFound(book_id).into())
    }

    async fn invalidate(&self, book_id: BookId) {
        if let Some(cache) = self.ctx.book_cache() {
            if let Err(e) = cache.invalidate_book(book_id).await {
                warn!(book_id = %book_id, error = %e, "Failed to invalidate cached book");
            }
        }
    }
}

/// Normalise a raw listing query: blank search means no search, the limit is
/// clamped into range and negative offsets start from the top.
fn book_query(raw: ListBooksQuery) -> ServiceResult<BookQuery> {
    let category_id = raw
        .category_id
        .as_deref()
        .map(CategoryId::parse)
        .transpose()?;

    let search = raw
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(BookQuery {
        category_id,
        search,
        limit: raw
            .limit
            .unwrap_or(BookQuery::DEFAULT_LIMIT)
            .clamp(1, BookQuery::MAX_LIMIT),
        offset: raw.offset.unwrap_or(0).max(0),
    })
}

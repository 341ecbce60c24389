//! Book entity <-> model mapper

use booknest_core::entities::{Book, NewBook};
use booknest_core::value_objects::{BookId, CategoryId};

use crate::models::BookModel;

impl From<BookModel> for Book {
    fn from(model: BookModel) -> Self {
        Book {
            id: BookId::new(model.id),
            title: model.title,
            author: model.author,
            description: model.description,
            cover_url: model.cover_url,
            category_id: model.category_id.map(CategoryId::new),
            published_year: model.published_year,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Bind values for inserting a book
pub struct BookInsert<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub description: Option<&'a str>,
    pub cover_url: Option<&'a str>,
    pub category_id: Option<i64>,
    pub published_year: Option<i32>,
}

impl<'a> BookInsert<'a> {
    pub fn new(book: &'a NewBook) -> Self {
        Self {
            title: &book.title,
            author: &book.author,
            description: book.description.as_deref(),
            cover_url: book.cover_url.as_deref(),
            category_id: book.category_id.map(CategoryId::into_inner),
            published_year: book.published_year,
        }
    }
}

/// Bind values for overwriting a book's mutable fields
pub struct BookUpdate<'a> {
    pub id: i64,
    pub title: &'a str,
    pub author: &'a str,
    pub description: Option<&'a str>,
    pub cover_url: Option<&'a str>,
    pub category_id: Option<i64>,
    pub published_year: Option<i32>,
}

impl<'a> BookUpdate<'a> {
    pub fn new(book: &'a Book) -> Self {
        Self {
            id: book.id.into_inner(),
            title: &book.title,
            author: &book.author,
            description: book.description.as_deref(),
            cover_url: book.cover_url.as_deref(),
            category_id: book.category_id.map(CategoryId::into_inner),
            published_year: book.published_year,
        }
    }
}

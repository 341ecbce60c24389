//! Entity to DTO mappers

use booknest_core::entities::{Book, Category, TransformedComment};

use super::responses::{BookResponse, CategoryResponse, CommentResponse};

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.into_inner(),
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            cover_url: book.cover_url.clone(),
            category_id: book.category_id.map(|id| id.into_inner()),
            published_year: book.published_year,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self::from(&book)
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into_inner(),
            name: category.name,
            created_at: category.created_at,
        }
    }
}

impl From<TransformedComment> for CommentResponse {
    fn from(transformed: TransformedComment) -> Self {
        let TransformedComment {
            comment,
            reaction_counts,
            viewer_reaction,
        } = transformed;

        Self {
            id: comment.id.into_inner(),
            book_id: comment.book_id.into_inner(),
            user_id: comment.user_id.to_string(),
            body: comment.body,
            created_at: comment.created_at,
            reaction_counts: reaction_counts
                .into_iter()
                .map(|(kind, count)| (kind.into_inner(), count))
                .collect(),
            viewer_reaction: viewer_reaction.map(|kind| kind.into_inner()),
        }
    }
}

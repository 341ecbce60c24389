//! Book entity - a title in the catalog

use chrono::{DateTime, Utc};

use crate::value_objects::{BookId, CategoryId};

/// Book entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Check if the book is filed under a category
    #[inline]
    pub fn is_categorized(&self) -> bool {
        self.category_id.is_some()
    }

    /// Apply a partial update in place, returning whether anything changed
    pub fn apply(&mut self, changes: &BookChanges) -> bool {
        let mut changed = false;

        if let Some(title) = &changes.title {
            if *title != self.title {
                self.title.clone_from(title);
                changed = true;
            }
        }
        if let Some(author) = &changes.author {
            if *author != self.author {
                self.author.clone_from(author);
                changed = true;
            }
        }
        if changes.description.is_some() && changes.description != self.description {
            self.description.clone_from(&changes.description);
            changed = true;
        }
        if changes.cover_url.is_some() && changes.cover_url != self.cover_url {
            self.cover_url.clone_from(&changes.cover_url);
            changed = true;
        }
        if changes.category_id.is_some() && changes.category_id != self.category_id {
            self.category_id = changes.category_id;
            changed = true;
        }
        if changes.published_year.is_some() && changes.published_year != self.published_year {
            self.published_year = changes.published_year;
            changed = true;
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}

/// Values for inserting a book; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub published_year: Option<i32>,
}

impl NewBook {
    /// Create a NewBook with only the required fields
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: None,
            cover_url: None,
            category_id: None,
            published_year: None,
        }
    }
}

/// Partial update for a book. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub published_year: Option<i32>,
}

impl BookChanges {
    /// Check if the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        let now = Utc::now();
        Book {
            id: BookId::new(1),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: None,
            cover_url: None,
            category_id: None,
            published_year: Some(1965),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_apply_changes() {
        let mut book = sample_book();
        let changes = BookChanges {
            title: Some("Dune Messiah".to_string()),
            category_id: Some(CategoryId::new(4)),
            ..Default::default()
        };

        assert!(book.apply(&changes));
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert!(book.is_categorized());
    }

    #[test]
    fn test_apply_same_values_is_noop() {
        let mut book = sample_book();
        let before = book.updated_at;
        let changes = BookChanges {
            title: Some("Dune".to_string()),
            published_year: Some(1965),
            ..Default::default()
        };

        assert!(!book.apply(&changes));
        assert_eq!(book.updated_at, before);
    }

    #[test]
    fn test_empty_changes() {
        assert!(BookChanges::default().is_empty());
        let changes = BookChanges {
            author: Some("x".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}

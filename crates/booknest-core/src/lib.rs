//! # booknest-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! comment reaction aggregator.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod aggregation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregation::aggregate;
pub use entities::{
    Book, BookChanges, Category, Comment, CommentReaction, Favorite, NewBook, NewComment,
    TransformedComment,
};
pub use error::DomainError;
pub use traits::{
    BookQuery, BookRepository, CategoryRepository, CommentRepository, FavoriteRepository,
    ReactionRepository, RepoResult,
};
pub use value_objects::{BookId, CategoryId, CommentId, IdError, ReactionKind, UserId};

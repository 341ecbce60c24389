//! Repository traits

mod repositories;

pub use repositories::{
    BookQuery, BookRepository, CategoryRepository, CommentRepository, FavoriteRepository,
    ReactionRepository, RepoResult,
};

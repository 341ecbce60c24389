//! Database models - SQLx-compatible structs for PostgreSQL tables

mod book;
mod category;
mod comment;

pub use book::BookModel;
pub use category::CategoryModel;
pub use comment::{CommentModel, CommentReactionModel};

//! Model to entity mappers
//!
//! `From<Model> for Entity` turns database rows into domain objects. The
//! `*Insert`/`*Update` structs flatten entity data into bindable values.

mod book;
mod category;
mod comment;

pub use book::{BookInsert, BookUpdate};
pub use comment::{CommentInsert, ReactionInsert};

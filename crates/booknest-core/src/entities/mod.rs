//! Domain entities - core business objects

mod book;
mod category;
mod comment;
mod favorite;

pub use book::{Book, BookChanges, NewBook};
pub use category::Category;
pub use comment::{Comment, CommentReaction, NewComment, TransformedComment, MAX_COMMENT_LEN};
pub use favorite::Favorite;

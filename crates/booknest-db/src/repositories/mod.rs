//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in booknest-core.
//! Each method issues one statement; none of them opens a transaction.

mod book;
mod category;
mod comment;
mod error;
mod favorite;
mod reaction;

pub use book::PgBookRepository;
pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use favorite::PgFavoriteRepository;
pub use reaction::PgReactionRepository;

//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of one
//! request. Identifiers arrive as raw strings and are validated before any
//! repository is called.

pub mod book;
pub mod category;
pub mod comment;
pub mod contact;
pub mod context;
pub mod error;
pub mod favorite;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use book::BookService;
pub use category::CategoryService;
pub use comment::CommentService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;

//! # booknest-service
//!
//! Application layer: use cases, DTOs and the outgoing mail port.

pub mod dto;
pub mod mail;
pub mod services;

pub use mail::{ContactMessage, MailError, Mailer, SmtpMailer};
pub use services::{
    BookService, CategoryService, CommentService, ContactService, FavoriteService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};

//! Route handlers
//!
//! Thin glue between HTTP and the services: extract, call, wrap.

pub mod books;
pub mod categories;
pub mod comments;
pub mod contact;
pub mod favorites;
pub mod health;

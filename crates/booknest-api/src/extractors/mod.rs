//! Axum extractors for request handling
//!
//! Bearer-token authentication, validated JSON bodies and query strings that
//! reject with the API error envelope.

mod auth;
mod query;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use query::ApiQuery;
pub use validated::ValidatedJson;

//! Identifier value objects
//!
//! Users are identified by the UUID the auth provider assigns. Books, categories,
//! and comments use positive `bigint` identity keys generated by the database.
//!
//! Identifiers arrive from the outside world as strings (path segments, token
//! subjects), so every type exposes a `parse` that distinguishes a missing value
//! from a malformed one.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Error when an identifier is missing or malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("invalid {0} format")]
    Invalid(&'static str),
}

/// Supabase user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse a user id, rejecting empty and non-UUID input
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Missing("user_id"));
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| IdError::Invalid("user_id"))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for UserId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a positive integer key, naming the field in the error
fn parse_row_id(s: &str, field: &'static str) -> Result<i64, IdError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(IdError::Missing(field));
    }
    match s.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(IdError::Invalid(field)),
    }
}

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an id from a raw database key
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Parse from string representation
            pub fn parse(s: &str) -> Result<Self, IdError> {
                parse_row_id(s, $field).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

row_id!(
    /// Book identifier
    BookId,
    "book_id"
);
row_id!(
    /// Category identifier
    CategoryId,
    "category_id"
);
row_id!(
    /// Comment identifier
    CommentId,
    "comment_id"
);

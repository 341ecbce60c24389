//! Reaction kind - the category of a user's response to a comment
//!
//! The set of kinds is open. `like` and `dislike` are what the front end sends
//! today, but stored rows are never checked against a catalog so that new kinds
//! can roll out without a back-end release.

use std::fmt;

/// Maximum length of a reaction kind
pub const MAX_KIND_LEN: usize = 32;

/// Reaction kind (open string-keyed set)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReactionKind(String);

impl ReactionKind {
    pub const LIKE: &'static str = "like";
    pub const DISLIKE: &'static str = "dislike";

    /// Wrap a kind read back from storage without checking its shape
    pub fn from_stored(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// `like`
    pub fn like() -> Self {
        Self(Self::LIKE.to_string())
    }

    /// `dislike`
    pub fn dislike() -> Self {
        Self(Self::DISLIKE.to_string())
    }

    /// Parse a kind submitted by a client.
    ///
    /// Accepts 1 to 32 characters of lowercase ASCII letters, digits, `_` and `-`.
    /// Input is trimmed and lowercased first.
    pub fn parse(s: &str) -> Result<Self, String> {
        let kind = s.trim().to_ascii_lowercase();
        if kind.is_empty() {
            return Err("reaction kind is required".to_string());
        }
        if kind.len() > MAX_KIND_LEN {
            return Err(format!("reaction kind must be at most {MAX_KIND_LEN} characters"));
        }
        if !kind
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err(format!("invalid reaction kind: {kind}"));
        }
        Ok(Self(kind))
    }

    /// Borrow the kind as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReactionKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

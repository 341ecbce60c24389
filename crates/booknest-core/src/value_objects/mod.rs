//! Value objects - immutable types that represent domain concepts

mod ids;
mod reaction_kind;

pub use ids::{BookId, CategoryId, CommentId, IdError, UserId};
pub use reaction_kind::{ReactionKind, MAX_KIND_LEN};

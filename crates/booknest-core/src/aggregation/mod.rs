//! Comment reaction aggregation
//!
//! Turns raw comment rows and raw reaction rows into per-comment views that
//! carry reaction counts and the viewer's own reaction.

use std::collections::{BTreeMap, HashMap};

use crate::entities::{Comment, CommentReaction, TransformedComment};
use crate::value_objects::{CommentId, ReactionKind, UserId};

#[derive(Debug, Default, Clone)]
struct Tally {
    counts: BTreeMap<ReactionKind, i64>,
    viewer: Option<ReactionKind>,
}

/// Aggregate reactions onto their comments.
///
/// - Output has one entry per input comment, in input order.
/// - Each kind present among a comment's reactions is counted under its own key;
///   kinds are not checked against any catalog.
/// - `viewer_reaction` is the kind of the viewer's row on that comment, or
///   `None` when there is no viewer or no such row.
/// - Reactions whose `comment_id` matches no input comment are ignored.
pub fn aggregate(
    comments: Vec<Comment>,
    reactions: &[CommentReaction],
    viewer_id: Option<UserId>,
) -> Vec<TransformedComment> {
    let mut tallies: HashMap<CommentId, Tally> = comments
        .iter()
        .map(|comment| (comment.id, Tally::default()))
        .collect();

    for reaction in reactions {
        let Some(tally) = tallies.get_mut(&reaction.comment_id) else {
            continue;
        };

        *tally.counts.entry(reaction.kind.clone()).or_insert(0) += 1;

        if tally.viewer.is_none() && viewer_id == Some(reaction.user_id) {
            tally.viewer = Some(reaction.kind.clone());
        }
    }

    comments
        .into_iter()
        .map(|comment| {
            let tally = tallies.get(&comment.id).cloned().unwrap_or_default();
            TransformedComment {
                comment,
                reaction_counts: tally.counts,
                viewer_reaction: tally.viewer,
            }
        })
        .collect()
}

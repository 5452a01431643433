//! Like/dislike reaction sets.
//!
//! The one toggle rule shared by caregiver reviews and feed posts:
//! reacting toggles your membership in the chosen set and always clears
//! you from the opposite one. Re-invoking the same reaction removes it
//! entirely. This is intentionally different from swipe reactions, which
//! overwrite instead of toggling.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// The two reaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Like,
    Dislike,
}

/// Two disjoint sets of reacting users.
///
/// Backed by insertion-ordered vectors so the persisted form stays a
/// plain array of user ids; `set_reaction` is the only mutation path and
/// keeps the sets disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionSets {
    pub likes: Vec<UserId>,
    pub dislikes: Vec<UserId>,
}

impl ReactionSets {
    /// Empty sets for a freshly created review or post.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one reaction atomically.
    ///
    /// Toggles `actor` in the chosen set, then removes them from the
    /// opposite set. After any call the actor appears in at most one set.
    pub fn set_reaction(&mut self, actor: UserId, kind: ReactionKind) {
        let (own, opposite) = match kind {
            ReactionKind::Like => (&mut self.likes, &mut self.dislikes),
            ReactionKind::Dislike => (&mut self.dislikes, &mut self.likes),
        };

        if let Some(index) = own.iter().position(|id| *id == actor) {
            own.remove(index);
        } else {
            own.push(actor);
        }
        opposite.retain(|id| *id != actor);
    }

    /// Returns true if the actor currently likes.
    pub fn has_liked(&self, actor: &UserId) -> bool {
        self.likes.contains(actor)
    }

    /// Returns true if the actor currently dislikes.
    pub fn has_disliked(&self, actor: &UserId) -> bool {
        self.dislikes.contains(actor)
    }

    /// Returns true while no user appears in both sets.
    pub fn are_disjoint(&self) -> bool {
        !self.likes.iter().any(|id| self.dislikes.contains(id))
    }
}

//! Swipe reactions.
//!
//! One reaction per (actor, target) pair. Re-swiping the same target
//! overwrites the stored choice in place; this is deliberately an upsert,
//! not a toggle, and differs from the like/dislike sets on reviews and
//! posts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SwipeId, Timestamp, UserId};

/// Which way the actor swiped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeChoice {
    Like,
    Dislike,
}

/// A recorded swipe from one user on a caregiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeReaction {
    /// Unique identifier.
    pub id: SwipeId,

    /// The swiping user.
    pub from_user_id: UserId,

    /// The caregiver swiped on. Never equal to `from_user_id`.
    pub target_user_id: UserId,

    /// The stored choice; overwritten by re-swipes.
    pub reaction: SwipeChoice,

    /// When the pair was first swiped. Not touched by overwrites.
    pub created_at: Timestamp,
}

impl SwipeReaction {
    /// Records a first swipe for a pair.
    pub fn new(
        id: SwipeId,
        from_user_id: UserId,
        target_user_id: UserId,
        reaction: SwipeChoice,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            from_user_id,
            target_user_id,
            reaction,
            created_at: now,
        }
    }

    /// Overwrites the stored choice. Identity and creation time stay.
    pub fn set_reaction(&mut self, reaction: SwipeChoice) {
        self.reaction = reaction;
    }

    /// Returns true if this record belongs to the given pair.
    pub fn is_pair(&self, from: &UserId, target: &UserId) -> bool {
        &self.from_user_id == from && &self.target_user_id == target
    }

    /// Returns true if the stored choice is a like.
    pub fn is_like(&self) -> bool {
        self.reaction == SwipeChoice::Like
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_changes_choice_but_not_identity() {
        let created = Timestamp::now();
        let mut swipe = SwipeReaction::new(
            SwipeId::new(),
            UserId::new(),
            UserId::new(),
            SwipeChoice::Like,
            created,
        );
        let original_id = swipe.id;

        swipe.set_reaction(SwipeChoice::Dislike);

        assert_eq!(swipe.reaction, SwipeChoice::Dislike);
        assert_eq!(swipe.id, original_id);
        assert_eq!(swipe.created_at, created);
    }

    #[test]
    fn same_choice_overwrite_is_a_no_op_not_a_removal() {
        let mut swipe = SwipeReaction::new(
            SwipeId::new(),
            UserId::new(),
            UserId::new(),
            SwipeChoice::Like,
            Timestamp::now(),
        );

        swipe.set_reaction(SwipeChoice::Like);

        assert!(swipe.is_like());
    }

    #[test]
    fn is_pair_matches_direction() {
        let from = UserId::new();
        let target = UserId::new();
        let swipe = SwipeReaction::new(
            SwipeId::new(),
            from,
            target,
            SwipeChoice::Like,
            Timestamp::now(),
        );

        assert!(swipe.is_pair(&from, &target));
        assert!(!swipe.is_pair(&target, &from));
    }

    #[test]
    fn choice_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&SwipeChoice::Like).unwrap(),
            "\"like\""
        );
        assert_eq!(
            serde_json::to_string(&SwipeChoice::Dislike).unwrap(),
            "\"dislike\""
        );
    }
}

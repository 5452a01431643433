//! Caregiver reviews and their comment threads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Rating, ReviewCommentId, ReviewId, Timestamp, UserId, ValidationError,
};

use super::{ReactionKind, ReactionSets};

/// One rater's standing opinion of one caregiver.
///
/// Keyed by the (target, author) pair: re-rating revises this record in
/// place, so an aggregate score always reflects each rater's latest
/// opinion only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique identifier.
    pub id: ReviewId,

    /// The caregiver being reviewed.
    pub target_user_id: UserId,

    /// The reviewing user. Never equal to `target_user_id`.
    pub author_user_id: UserId,

    /// Star rating, always in range.
    pub rating: Rating,

    /// Free-form remark; may be empty.
    pub comment: String,

    /// When the pair was first reviewed. Not touched by revisions.
    pub created_at: Timestamp,

    /// Reader reactions to this review.
    #[serde(flatten)]
    pub reactions: ReactionSets,
}

impl Review {
    /// Records a first review for a pair.
    pub fn new(
        id: ReviewId,
        target_user_id: UserId,
        author_user_id: UserId,
        rating: Rating,
        comment: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            target_user_id,
            author_user_id,
            rating,
            comment: comment.into().trim().to_string(),
            created_at: now,
            reactions: ReactionSets::new(),
        }
    }

    /// Replaces rating and comment with the author's latest opinion.
    ///
    /// Identity, creation time, and accumulated reactions stay.
    pub fn revise(&mut self, rating: Rating, comment: impl Into<String>) {
        self.rating = rating;
        self.comment = comment.into().trim().to_string();
    }

    /// Returns true if this review belongs to the given pair.
    pub fn is_pair(&self, target: &UserId, author: &UserId) -> bool {
        &self.target_user_id == target && &self.author_user_id == author
    }

    /// Toggles a reader's like/dislike on this review.
    pub fn set_reaction(&mut self, actor: UserId, kind: ReactionKind) {
        self.reactions.set_reaction(actor, kind);
    }
}

/// One entry in a review's comment thread. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewComment {
    /// Unique identifier.
    pub id: ReviewCommentId,

    /// The review being commented on.
    pub review_id: ReviewId,

    /// The commenting user.
    pub author_user_id: UserId,

    /// Comment text, non-empty after trimming.
    pub body: String,

    /// When the comment was added.
    pub created_at: Timestamp,
}

impl ReviewComment {
    /// Creates a thread entry. The body is required after trimming.
    pub fn new(
        id: ReviewCommentId,
        review_id: ReviewId,
        author_user_id: UserId,
        body: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let body = body.into().trim().to_string();
        if body.is_empty() {
            return Err(ValidationError::empty_field("body"));
        }
        Ok(Self {
            id,
            review_id,
            author_user_id,
            body,
            created_at: now,
        })
    }
}

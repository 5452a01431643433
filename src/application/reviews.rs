//! Ratings, review threads and review reactions.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, Rating, ReviewCommentId, ReviewId, UserId};
use crate::domain::reputation::{ReactionKind, Review, ReviewComment};
use crate::ports::{Clock, IdentityResolver, Store};

use super::require_actor;

/// A review joined with its comment thread.
#[derive(Debug, Clone)]
pub struct ReviewThread {
    pub review: Review,
    pub comments: Vec<ReviewComment>,
}

/// Caregiver reputation.
///
/// One review per (author, target) pair; re-rating revises in place so an
/// average always reflects each rater's latest opinion. Review reactions
/// follow the shared toggle rule: picking the reaction already held removes
/// it, picking the opposite one moves the reader across.
pub struct ReviewService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityResolver>,
    clock: Arc<dyn Clock>,
}

impl ReviewService {
    pub fn new(
        store: Arc<dyn Store>,
        identity: Arc<dyn IdentityResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            identity,
            clock,
        }
    }

    /// Rates a caregiver, revising the actor's earlier review of the same
    /// target if one exists. Out-of-range ratings clamp into [1, 5].
    pub fn rate(
        &self,
        target_user_id: UserId,
        rating: i64,
        comment: &str,
    ) -> Result<Review, DomainError> {
        // 1. Resolve the actor
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;

        // 2. Refuse self-reviews and unknown targets
        if actor.id == target_user_id {
            warn!(user_id = %actor.id, "self-review refused");
            return Err(DomainError::self_reference("Cannot review yourself"));
        }
        if snapshot.user(target_user_id).is_none() {
            return Err(DomainError::not_found("User", target_user_id));
        }

        // 3. Upsert the review for the pair
        let rating = Rating::clamped(rating);
        let now = self.clock.now();
        let committed = self.store.mutate(&mut |snapshot| {
            snapshot.upsert_review(target_user_id, actor.id, rating, comment, now);
        });

        let review = committed
            .review_by_pair(target_user_id, actor.id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Review", target_user_id))?;

        info!(
            author = %actor.id,
            target = %target_user_id,
            rating = %rating,
            "review recorded"
        );
        Ok(review)
    }

    /// Arithmetic mean of all ratings for a target, one decimal place.
    /// A target with no reviews averages 0.0.
    pub fn average(&self, target_user_id: UserId) -> f64 {
        let snapshot = self.store.read();
        let average = Rating::average(&snapshot.ratings_of(target_user_id));
        debug!(target = %target_user_id, average = average, "computed rating average");
        average
    }

    /// Toggles the actor's like/dislike on a review.
    pub fn react_to_review(
        &self,
        review_id: ReviewId,
        kind: ReactionKind,
    ) -> Result<Review, DomainError> {
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        if snapshot.review(review_id).is_none() {
            return Err(DomainError::not_found("Review", review_id));
        }

        let committed = self.store.mutate(&mut |snapshot| {
            if let Some(review) = snapshot.review_mut(review_id) {
                review.set_reaction(actor.id, kind);
            }
        });

        let review = committed
            .review(review_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Review", review_id))?;

        info!(user_id = %actor.id, review = %review_id, kind = ?kind, "review reaction toggled");
        Ok(review)
    }

    /// Appends a comment to a review's thread. The body is required after
    /// trimming.
    pub fn comment_on_review(
        &self,
        review_id: ReviewId,
        body: &str,
    ) -> Result<ReviewComment, DomainError> {
        // 1. Resolve the actor and the review
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        if snapshot.review(review_id).is_none() {
            return Err(DomainError::not_found("Review", review_id));
        }

        // 2. Validate the comment, then append
        let now = self.clock.now();
        let comment = ReviewComment::new(ReviewCommentId::new(), review_id, actor.id, body, now)?;
        self.store.mutate(&mut |snapshot| {
            snapshot.review_comments.push(comment.clone());
        });

        info!(user_id = %actor.id, review = %review_id, "review comment added");
        Ok(comment)
    }

    /// All reviews written about a target, each with its comment thread,
    /// in creation order. Free read; no actor requirement.
    pub fn reviews_of(&self, target_user_id: UserId) -> Vec<ReviewThread> {
        let snapshot = self.store.read();
        let threads: Vec<ReviewThread> = snapshot
            .reviews_of(target_user_id)
            .into_iter()
            .map(|review| ReviewThread {
                review: review.clone(),
                comments: snapshot
                    .comments_on_review(review.id)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect();
        debug!(target = %target_user_id, count = threads.len(), "listed reviews");
        threads
    }
}

//! The authoritative world state.
//!
//! A [`Snapshot`] holds every collection the engine governs plus the current
//! actor pointer. All cross-entity lookup rules (find user by normalized
//! email, upsert a review by its author/target pair, cascade a post
//! deletion) live here so every caller applies identical rules.
//!
//! # Ownership
//!
//! The snapshot owns its entities outright. Components never hold references
//! into it across mutations; they look entities up again inside each
//! mutation.

use serde::{Deserialize, Serialize};

use crate::domain::availability::{AvailabilityRecord, Position};
use crate::domain::caregiver::CaregiverProfile;
use crate::domain::feed::{Post, PostComment};
use crate::domain::foundation::{
    EmailAddress, PetId, PostId, Rating, ReviewId, SwipeId, Timestamp, UserId,
};
use crate::domain::matching::{SwipeChoice, SwipeReaction};
use crate::domain::messaging::Message;
use crate::domain::pet::Pet;
use crate::domain::reputation::{Review, ReviewComment};
use crate::domain::user::User;

/// Complete engine state as one serializable document.
///
/// The persisted JSON shape is stable: collection keys are camelCase and
/// missing collections deserialize as empty, so older snapshots keep
/// loading as the model grows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// All registered users, stub accounts included.
    pub users: Vec<User>,

    /// One profile per user who has ever applied to be a caregiver.
    pub caregiver_profiles: Vec<CaregiverProfile>,

    /// One placement record per caregiver who has ever activated.
    pub availability_records: Vec<AvailabilityRecord>,

    /// Swipe reactions, one per (from, target) pair.
    pub swipe_reactions: Vec<SwipeReaction>,

    /// Reviews, one per (target, author) pair.
    pub reviews: Vec<Review>,

    /// Comment threads under reviews, in creation order.
    pub review_comments: Vec<ReviewComment>,

    /// Feed posts, in creation order (readers reverse for newest-first).
    pub posts: Vec<Post>,

    /// Comment threads under posts, in creation order.
    pub post_comments: Vec<PostComment>,

    /// Registered pets, in creation order.
    pub pets: Vec<Pet>,

    /// Direct messages, in creation order.
    pub messages: Vec<Message>,

    /// Who is acting right now, when a session is open.
    pub current_actor_id: Option<UserId>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks a user up by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Looks a user up by id, mutably.
    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Looks a user up by normalized email. [`EmailAddress`] folds case on
    /// construction, so plain equality is the uniqueness rule.
    pub fn user_by_email(&self, email: &EmailAddress) -> Option<&User> {
        self.users.iter().find(|u| &u.email == email)
    }

    /// Resolves the current actor pointer against the user collection.
    pub fn current_user(&self) -> Option<&User> {
        self.current_actor_id.and_then(|id| self.user(id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Caregiver profiles
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks a caregiver profile up by owner id.
    pub fn profile(&self, user_id: UserId) -> Option<&CaregiverProfile> {
        self.caregiver_profiles.iter().find(|p| p.user_id == user_id)
    }

    /// Looks a caregiver profile up by owner id, mutably.
    pub fn profile_mut(&mut self, user_id: UserId) -> Option<&mut CaregiverProfile> {
        self.caregiver_profiles
            .iter_mut()
            .find(|p| p.user_id == user_id)
    }

    /// The review queue: profiles awaiting a decision, oldest application
    /// first. Re-applying re-stamps the application time, which re-queues
    /// the profile at the back.
    pub fn pending_profiles(&self) -> Vec<&CaregiverProfile> {
        let mut pending: Vec<&CaregiverProfile> = self
            .caregiver_profiles
            .iter()
            .filter(|p| p.status.is_pending())
            .collect();
        pending.sort_by_key(|p| p.applied_at);
        pending
    }

    /// The swipe candidate pool: approved profiles in insertion order,
    /// excluding the viewer.
    pub fn candidate_pool(&self, viewer: UserId) -> Vec<&CaregiverProfile> {
        self.caregiver_profiles
            .iter()
            .filter(|p| p.is_approved() && p.user_id != viewer)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Availability
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks an availability record up by caregiver id.
    pub fn availability(&self, user_id: UserId) -> Option<&AvailabilityRecord> {
        self.availability_records
            .iter()
            .find(|r| r.user_id == user_id)
    }

    /// Creates or refreshes a caregiver's availability record.
    pub fn upsert_availability(&mut self, user_id: UserId, position: Position, now: Timestamp) {
        match self
            .availability_records
            .iter_mut()
            .find(|r| r.user_id == user_id)
        {
            Some(record) => record.refresh(position, now),
            None => self
                .availability_records
                .push(AvailabilityRecord::new(user_id, position, now)),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Swipes
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks the swipe reaction for a (from, target) pair up.
    pub fn swipe_between(&self, from: UserId, target: UserId) -> Option<&SwipeReaction> {
        self.swipe_reactions
            .iter()
            .find(|r| r.is_pair(&from, &target))
    }

    /// Records a swipe, keyed by the (from, target) pair. A second swipe on
    /// the same target overwrites the stored reaction rather than appending
    /// a new record. Returns the id of the surviving record.
    pub fn upsert_swipe(
        &mut self,
        from: UserId,
        target: UserId,
        choice: SwipeChoice,
        now: Timestamp,
    ) -> SwipeId {
        if let Some(existing) = self
            .swipe_reactions
            .iter_mut()
            .find(|r| r.is_pair(&from, &target))
        {
            existing.set_reaction(choice);
            return existing.id;
        }

        let reaction = SwipeReaction::new(SwipeId::new(), from, target, choice, now);
        let id = reaction.id;
        self.swipe_reactions.push(reaction);
        id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reviews
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks a review up by id.
    pub fn review(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    /// Looks a review up by id, mutably.
    pub fn review_mut(&mut self, id: ReviewId) -> Option<&mut Review> {
        self.reviews.iter_mut().find(|r| r.id == id)
    }

    /// Looks the review one author wrote about one target up.
    pub fn review_by_pair(&self, target: UserId, author: UserId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.is_pair(&target, &author))
    }

    /// Records a rating, keyed by the (target, author) pair. A repeat call
    /// revises the stored review in place, so a target's score reflects each
    /// rater's latest opinion only. Returns the id of the surviving review.
    pub fn upsert_review(
        &mut self,
        target: UserId,
        author: UserId,
        rating: Rating,
        comment: &str,
        now: Timestamp,
    ) -> ReviewId {
        if let Some(existing) = self.reviews.iter_mut().find(|r| r.is_pair(&target, &author)) {
            existing.revise(rating, comment);
            return existing.id;
        }

        let review = Review::new(ReviewId::new(), target, author, rating, comment, now);
        let id = review.id;
        self.reviews.push(review);
        id
    }

    /// All reviews written about one target, in creation order.
    pub fn reviews_of(&self, target: UserId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.target_user_id == target)
            .collect()
    }

    /// All ratings given to one target. Feeds [`Rating::average`].
    pub fn ratings_of(&self, target: UserId) -> Vec<Rating> {
        self.reviews
            .iter()
            .filter(|r| r.target_user_id == target)
            .map(|r| r.rating)
            .collect()
    }

    /// The comment thread under one review, in creation order.
    pub fn comments_on_review(&self, review_id: ReviewId) -> Vec<&ReviewComment> {
        self.review_comments
            .iter()
            .filter(|c| c.review_id == review_id)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Posts
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks a post up by id.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Looks a post up by id, mutably.
    pub fn post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Deletes a post and cascades its comment thread.
    pub fn remove_post(&mut self, id: PostId) {
        self.posts.retain(|p| p.id != id);
        self.post_comments.retain(|c| c.post_id != id);
    }

    /// The comment thread under one post, in creation order.
    pub fn comments_on_post(&self, post_id: PostId) -> Vec<&PostComment> {
        self.post_comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pets
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks a pet up by id.
    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    /// Looks a pet up by id, mutably.
    pub fn pet_mut(&mut self, id: PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.id == id)
    }

    /// Deletes a pet record.
    pub fn remove_pet(&mut self, id: PetId) {
        self.pets.retain(|p| p.id != id);
    }

    /// All pets of one owner, in creation order.
    pub fn pets_of(&self, owner: UserId) -> Vec<&Pet> {
        self.pets
            .iter()
            .filter(|p| p.owner_user_id == owner)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Messages
    // ─────────────────────────────────────────────────────────────────────────

    /// All messages one user sent or received, in creation order.
    pub fn messages_involving(&self, user_id: UserId) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| m.involves(&user_id))
            .collect()
    }
}

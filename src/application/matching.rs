//! Swipe matching over the caregiver pool.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::caregiver::CaregiverProfile;
use crate::domain::foundation::{DomainError, Rating, UserId};
use crate::domain::matching::{SwipeChoice, SwipeReaction};
use crate::domain::snapshot::Snapshot;
use crate::domain::user::User;
use crate::ports::{Clock, IdentityResolver, Store};

use super::require_actor;

/// A caregiver as presented on the swipe deck and the likes list: the
/// account joined with its profile and current average rating.
#[derive(Debug, Clone)]
pub struct CaregiverCard {
    pub user: User,
    pub profile: CaregiverProfile,
    pub average_rating: f64,
}

/// Swipe recording and candidate selection.
///
/// The candidate pool is every approved caregiver except the actor, in
/// insertion order. Selection prefers the first candidate the actor has
/// never swiped; once everyone has been swiped it wraps back to the first
/// candidate, so the deck repeats rather than running dry.
pub struct MatchingService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityResolver>,
    clock: Arc<dyn Clock>,
}

impl MatchingService {
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

    /// Records the actor's choice on a target, overwriting any earlier
    /// choice for the same pair.
    pub fn swipe(
        &self,
        target_user_id: UserId,
        choice: SwipeChoice,
    ) -> Result<SwipeReaction, DomainError> {
        // 1. Resolve the actor
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;

        // 2. Refuse self-swipes and unknown targets
        if actor.id == target_user_id {
            warn!(user_id = %actor.id, "self-swipe refused");
            return Err(DomainError::self_reference("Cannot swipe on yourself"));
        }
        if snapshot.user(target_user_id).is_none() {
            return Err(DomainError::not_found("User", target_user_id));
        }

        // 3. Upsert the reaction for the pair
        let now = self.clock.now();
        let committed = self.store.mutate(&mut |snapshot| {
            snapshot.upsert_swipe(actor.id, target_user_id, choice, now);
        });

        let swipe = committed
            .swipe_between(actor.id, target_user_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("SwipeReaction", target_user_id))?;

        info!(
            from = %actor.id,
            target = %target_user_id,
            choice = ?choice,
            "swipe recorded"
        );
        Ok(swipe)
    }

    /// Picks the next caregiver to show the actor.
    ///
    /// Returns `None` only when the pool itself is empty; a fully swiped
    /// pool wraps around to its first candidate instead.
    pub fn next_candidate(&self) -> Result<Option<CaregiverCard>, DomainError> {
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;

        let pool = snapshot.candidate_pool(actor.id);
        let selected = pool
            .iter()
            .find(|profile| snapshot.swipe_between(actor.id, profile.user_id).is_none())
            .or_else(|| pool.first())
            .copied();

        let Some(profile) = selected else {
            debug!(user_id = %actor.id, "candidate pool is empty");
            return Ok(None);
        };

        let card = card_for(&snapshot, profile)
            .ok_or_else(|| DomainError::not_found("User", profile.user_id))?;
        debug!(user_id = %actor.id, candidate = %card.user.id, "selected next candidate");
        Ok(Some(card))
    }

    /// Lists the caregivers the actor has liked, in swipe order.
    ///
    /// Only targets whose profile is currently approved appear; a later
    /// denial hides the entry without deleting the underlying reaction.
    pub fn liked_targets(&self) -> Result<Vec<CaregiverCard>, DomainError> {
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;

        let liked: Vec<CaregiverCard> = snapshot
            .swipe_reactions
            .iter()
            .filter(|swipe| swipe.from_user_id == actor.id && swipe.is_like())
            .filter_map(|swipe| {
                let profile = snapshot.profile(swipe.target_user_id)?;
                if !profile.is_approved() {
                    return None;
                }
                card_for(&snapshot, profile)
            })
            .collect();

        debug!(user_id = %actor.id, count = liked.len(), "listed liked caregivers");
        Ok(liked)
    }
}

fn card_for(snapshot: &Snapshot, profile: &CaregiverProfile) -> Option<CaregiverCard> {
    let user = snapshot.user(profile.user_id)?;
    let average_rating = Rating::average(&snapshot.ratings_of(profile.user_id));
    Some(CaregiverCard {
        user: user.clone(),
        profile: profile.clone(),
        average_rating,
    })
}

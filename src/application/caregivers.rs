//! Caregiver application, vetting and activation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::availability::Position;
use crate::domain::caregiver::CaregiverProfile;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{Clock, CoordinateSource, IdentityResolver, Store};

use super::require_actor;

/// A caregiver application as submitted from the boundary layer.
#[derive(Debug, Clone)]
pub struct ApplyCommand {
    pub bio: String,
    pub experience_years: i64,
    pub photos: Vec<String>,
}

/// The caregiver vetting lifecycle.
///
/// Applications go `pending → approved/denied` under staff review, and a
/// settled profile re-enters `pending` on re-application. Approval is the
/// only path that promotes a user's role to caregiver; activation is the
/// separate switch that puts an approved caregiver on the live map.
pub struct CaregiverService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityResolver>,
    clock: Arc<dyn Clock>,
    coordinates: Arc<dyn CoordinateSource>,
}

impl CaregiverService {
    pub fn new(
        store: Arc<dyn Store>,
        identity: Arc<dyn IdentityResolver>,
        clock: Arc<dyn Clock>,
        coordinates: Arc<dyn CoordinateSource>,
    ) -> Self {
        Self {
            store,
            identity,
            clock,
            coordinates,
        }
    }

    /// Submits or overwrites the actor's caregiver application.
    ///
    /// Whatever the prior status, the profile ends up `Pending` with
    /// availability off; an approved caregiver who edits their application
    /// goes back through review.
    pub fn apply(&self, command: ApplyCommand) -> Result<CaregiverProfile, DomainError> {
        // 1. Resolve the actor
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;

        // 2. Create or overwrite the profile
        let now = self.clock.now();
        let committed = self.store.mutate(&mut |snapshot| {
            match snapshot.profile_mut(actor.id) {
                Some(profile) => profile.resubmit(
                    command.bio.clone(),
                    command.experience_years,
                    command.photos.clone(),
                    now,
                ),
                None => snapshot.caregiver_profiles.push(CaregiverProfile::new_application(
                    actor.id,
                    command.bio.clone(),
                    command.experience_years,
                    command.photos.clone(),
                    now,
                )),
            }
        });

        let profile = committed
            .profile(actor.id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("CaregiverProfile", actor.id))?;

        info!(user_id = %actor.id, "caregiver application submitted");
        Ok(profile)
    }

    /// Records a staff decision on a pending application.
    ///
    /// Approval additionally promotes the target user's role to caregiver
    /// and creates their availability record (position drawn from the
    /// coordinate source) when none exists yet. Both branches leave the
    /// profile inactive; going live afterwards is the caregiver's own
    /// `set_active` call.
    pub fn decide(
        &self,
        target_user_id: UserId,
        approve: bool,
    ) -> Result<CaregiverProfile, DomainError> {
        // 1. Resolve the actor and check the staff role
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        if !actor.is_staff() {
            warn!(user_id = %actor.id, target = %target_user_id, "non-staff decision attempt");
            return Err(DomainError::forbidden(
                "Only staff can decide caregiver applications",
            )
            .with_detail("user_id", actor.id.to_string()));
        }

        // 2. Validate the transition on a copy before committing
        let mut decided = snapshot
            .profile(target_user_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("CaregiverProfile", target_user_id))?;
        let now = self.clock.now();
        decided.decide(approve, actor.id, now)?;

        // 3. Draw a position only when approval has to create a record
        let placement = (approve && snapshot.availability(target_user_id).is_none())
            .then(|| self.coordinates.next_position());

        // 4. Commit the decision with its side effects
        self.store.mutate(&mut |snapshot| {
            if let Some(profile) = snapshot.profile_mut(target_user_id) {
                *profile = decided.clone();
            }
            if approve {
                if let Some(user) = snapshot.user_mut(target_user_id) {
                    user.promote_to_caregiver();
                }
                if let Some(position) = placement {
                    if snapshot.availability(target_user_id).is_none() {
                        snapshot.upsert_availability(target_user_id, position, now);
                    }
                }
            }
        });

        info!(
            target = %target_user_id,
            approver = %actor.id,
            approve = approve,
            "caregiver application decided"
        );
        Ok(decided)
    }

    /// Flips the actor's availability switch.
    ///
    /// Activation refreshes the availability record with the supplied
    /// position, or one drawn from the coordinate source; deactivation
    /// leaves the record untouched so the last known position survives.
    pub fn set_active(
        &self,
        active: bool,
        position: Option<Position>,
    ) -> Result<CaregiverProfile, DomainError> {
        // 1. Resolve the actor and their profile
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        let mut profile = snapshot
            .profile(actor.id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("CaregiverProfile", actor.id))?;

        // 2. Validate the flip on a copy; unapproved profiles are refused
        if let Err(err) = profile.set_active(active) {
            warn!(user_id = %actor.id, active = active, "availability change refused");
            return Err(err);
        }

        // 3. Commit, refreshing the record on activation
        let now = self.clock.now();
        let placement = active.then(|| position.unwrap_or_else(|| self.coordinates.next_position()));
        self.store.mutate(&mut |snapshot| {
            if let Some(stored) = snapshot.profile_mut(actor.id) {
                *stored = profile.clone();
            }
            if let Some(position) = placement {
                snapshot.upsert_availability(actor.id, position, now);
            }
        });

        info!(user_id = %actor.id, active = active, "caregiver availability changed");
        Ok(profile)
    }

    /// Returns the review queue, oldest application first. Staff only.
    pub fn pending_applications(&self) -> Result<Vec<CaregiverProfile>, DomainError> {
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        if !actor.is_staff() {
            warn!(user_id = %actor.id, "non-staff review queue access");
            return Err(
                DomainError::forbidden("Only staff can list pending applications")
                    .with_detail("user_id", actor.id.to_string()),
            );
        }

        let pending: Vec<CaregiverProfile> =
            snapshot.pending_profiles().into_iter().cloned().collect();
        debug!(count = pending.len(), "listed pending applications");
        Ok(pending)
    }

    /// Read-only profile lookup; no actor requirement.
    pub fn profile_of(&self, user_id: UserId) -> Option<CaregiverProfile> {
        let profile = self.store.read().profile(user_id).cloned();
        debug!(user_id = %user_id, found = profile.is_some(), "looked up caregiver profile");
        profile
    }
}

//! Caregiver profile aggregate.
//!
//! One profile per user, created at first application and re-used on every
//! re-application. The profile owns the vetting state machine; the role
//! promotion that follows approval happens on the User, recorded by the
//! caller as part of the same mutation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, StateMachine, Timestamp, UserId};

use super::ApplicationStatus;

/// A user's caregiver application and vetting state.
///
/// # Invariants
///
/// - `user_id` is unique (one profile per user)
/// - `is_active` implies `status == Approved`; every status change forces
///   `is_active = false`
/// - `experience_years` is never negative (clamped on the way in)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaregiverProfile {
    /// The applying user. Also the profile's identity.
    pub user_id: UserId,

    /// Self-description shown on caregiver cards.
    pub bio: String,

    /// Years of experience claimed by the applicant.
    pub experience_years: u32,

    /// Vetting state.
    pub status: ApplicationStatus,

    /// Whether the caregiver is currently broadcasting availability.
    pub is_active: bool,

    /// Staff member who made the latest decision.
    pub approver_id: Option<UserId>,

    /// When the latest decision was made.
    pub approved_at: Option<Timestamp>,

    /// Profile photos (URLs or data URIs).
    pub photos: Vec<String>,

    /// When the first application was submitted.
    pub applied_at: Timestamp,
}

impl CaregiverProfile {
    /// Creates a profile from a first application. Starts at `Pending`
    /// with availability off.
    pub fn new_application(
        user_id: UserId,
        bio: impl Into<String>,
        experience_years: i64,
        photos: Vec<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            user_id,
            bio: bio.into().trim().to_string(),
            experience_years: experience_years.max(0) as u32,
            status: ApplicationStatus::Pending,
            is_active: false,
            approver_id: None,
            approved_at: None,
            photos,
            applied_at: now,
        }
    }

    /// Overwrites the application with fresh content.
    ///
    /// Always resets to `Pending` and turns availability off, whatever the
    /// prior status: an approved caregiver who edits their application goes
    /// back through review. Photos are replaced only when new ones are
    /// supplied; prior decision stamps stay until the next decision
    /// overwrites them.
    pub fn resubmit(
        &mut self,
        bio: impl Into<String>,
        experience_years: i64,
        photos: Vec<String>,
        now: Timestamp,
    ) {
        self.bio = bio.into().trim().to_string();
        self.experience_years = experience_years.max(0) as u32;
        // Every status re-enters Pending, so no transition can fail here.
        self.status = ApplicationStatus::Pending;
        self.is_active = false;
        if !photos.is_empty() {
            self.photos = photos;
        }
        self.applied_at = now;
    }

    /// Records a staff decision.
    ///
    /// Stamps the approver and decision time on both branches and turns
    /// availability off. Only a pending application can be decided; a
    /// settled one must be re-applied first.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the application is not pending.
    pub fn decide(
        &mut self,
        approve: bool,
        approver_id: UserId,
        now: Timestamp,
    ) -> Result<(), DomainError> {
        let target = if approve {
            ApplicationStatus::Approved
        } else {
            ApplicationStatus::Denied
        };

        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::conflict(format!(
                "Cannot decide an application in {:?} state; a new application is required",
                self.status
            ))
            .with_detail("user_id", self.user_id.to_string())
        })?;
        self.approver_id = Some(approver_id);
        self.approved_at = Some(now);
        self.is_active = false;
        Ok(())
    }

    /// Flips the availability flag.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` unless the profile is approved: a pending or
    /// denied caregiver attempting activation is refused, not ignored.
    pub fn set_active(&mut self, active: bool) -> Result<(), DomainError> {
        if !self.status.is_approved() {
            return Err(DomainError::forbidden(
                "Only approved caregivers can change availability",
            )
            .with_detail("user_id", self.user_id.to_string())
            .with_detail("status", format!("{:?}", self.status)));
        }
        self.is_active = active;
        Ok(())
    }

    /// Returns true once approved, whatever the availability flag says.
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }
}

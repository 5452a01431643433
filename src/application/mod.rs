//! Application layer - one service per engine component.
//!
//! Services orchestrate domain operations over the snapshot store: each
//! operation resolves the acting user, validates every precondition against
//! a read copy, and only then commits through a single `Store::mutate` call.
//! Nothing in here touches I/O directly; all side effects go through ports.

mod access;
mod availability;
mod caregivers;
mod feed;
mod matching;
mod messaging;
mod pets;
mod reviews;

pub use access::AccessService;
pub use availability::{AvailabilityService, LiveCaregiver};
pub use caregivers::{ApplyCommand, CaregiverService};
pub use feed::FeedService;
pub use matching::{CaregiverCard, MatchingService};
pub use messaging::MessagingService;
pub use pets::{AddPetCommand, PetService};
pub use reviews::{ReviewService, ReviewThread};

use crate::domain::foundation::DomainError;
use crate::domain::snapshot::Snapshot;
use crate::domain::user::User;
use crate::ports::IdentityResolver;

/// Resolves the acting user against a snapshot read copy.
///
/// Fails with `Unauthenticated` when the identity port reports no actor or
/// when the reported id no longer exists in the snapshot (e.g. a stale
/// pointer into a store that was since cleared).
pub(crate) fn require_actor(
    identity: &dyn IdentityResolver,
    snapshot: &Snapshot,
) -> Result<User, DomainError> {
    identity
        .current_actor_id()
        .and_then(|id| snapshot.user(id).cloned())
        .ok_or_else(DomainError::unauthenticated)
}

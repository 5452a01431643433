//! Live caregiver listing.

use std::cmp::Reverse;
use std::sync::Arc;

use tracing::debug;

use crate::domain::availability::{AvailabilityRecord, LIVE_RESULTS_CAP};
use crate::domain::caregiver::CaregiverProfile;
use crate::domain::user::User;
use crate::ports::{Clock, Store};

/// One entry of the live map: the caregiver joined with their vetting
/// profile and last check-in.
#[derive(Debug, Clone)]
pub struct LiveCaregiver {
    pub user: User,
    pub profile: CaregiverProfile,
    pub record: AvailabilityRecord,
}

/// Derived view over availability records.
///
/// Owns no mutation path: staleness is evaluated at read time, so a
/// caregiver that stops checking in silently drops out of the listing on
/// the next read instead of being actively evicted.
pub struct AvailabilityService {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Returns every caregiver who is approved, active and fresh, most
    /// recently seen first, capped to the listing size.
    pub fn list_live(&self) -> Vec<LiveCaregiver> {
        let snapshot = self.store.read();
        let now = self.clock.now();

        let mut live: Vec<LiveCaregiver> = snapshot
            .availability_records
            .iter()
            .filter(|record| record.is_live(now))
            .filter_map(|record| {
                let profile = snapshot.profile(record.user_id)?;
                if !(profile.is_active && profile.is_approved()) {
                    return None;
                }
                let user = snapshot.user(record.user_id)?;
                Some(LiveCaregiver {
                    user: user.clone(),
                    profile: profile.clone(),
                    record: *record,
                })
            })
            .collect();

        live.sort_by_key(|entry| Reverse(entry.record.last_seen_at));
        live.truncate(LIVE_RESULTS_CAP);

        debug!(count = live.len(), "listed live caregivers");
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedCoordinates, FixedIdentity, ManualClock, MemoryStore};
    use crate::application::{ApplyCommand, CaregiverService};
    use crate::domain::availability::{Position, FRESHNESS_WINDOW_SECS};
    use crate::domain::foundation::{EmailAddress, Role, Timestamp, UserId};
    use crate::domain::user::User;

    struct Harness {
        store: Arc<MemoryStore>,
        identity: Arc<FixedIdentity>,
        clock: Arc<ManualClock>,
        caregivers: CaregiverService,
        service: AvailabilityService,
    }

    fn harness() -> Harness {
        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(FixedIdentity::anonymous());
        let clock = Arc::new(ManualClock::starting_at(Timestamp::now()));
        let caregivers = CaregiverService::new(
            store.clone(),
            identity.clone(),
            clock.clone(),
            Arc::new(FixedCoordinates::new(Position::new(10.0, 20.0))),
        );
        let service = AvailabilityService::new(store.clone(), clock.clone());
        Harness {
            store,
            identity,
            clock,
            caregivers,
            service,
        }
    }

    impl Harness {
        fn seed_user(&self, email: &str, role: Role) -> UserId {
            let id = UserId::new();
            let email = EmailAddress::new(email).unwrap();
            let now = self.clock.now();
            self.store.mutate(&mut |snapshot| {
                snapshot
                    .users
                    .push(User::provision(id, email.clone(), "Test", "User", role, now));
            });
            id
        }

        /// Runs a user through apply, approval and activation.
        fn live_caregiver(&self, email: &str) -> UserId {
            let caregiver = self.seed_user(email, Role::Client);
            let staff = self.seed_user(&format!("staff-{email}"), Role::Employee);
            self.identity.set(Some(caregiver));
            self.caregivers
                .apply(ApplyCommand {
                    bio: "bio".to_string(),
                    experience_years: 3,
                    photos: vec![],
                })
                .unwrap();
            self.identity.set(Some(staff));
            self.caregivers.decide(caregiver, true).unwrap();
            self.identity.set(Some(caregiver));
            self.caregivers.set_active(true, None).unwrap();
            caregiver
        }
    }

    #[test]
    fn empty_store_lists_nobody() {
        let h = harness();

        assert!(h.service.list_live().is_empty());
    }

    #[test]
    fn active_approved_fresh_caregiver_is_listed() {
        let h = harness();
        let caregiver = h.live_caregiver("kay@example.com");

        let live = h.service.list_live();

        assert_eq!(live.len(), 1);
        assert_eq!(live[0].user.id, caregiver);
        assert_eq!(live[0].record.position, Position::new(10.0, 20.0));
    }

    #[test]
    fn inactive_caregiver_is_not_listed() {
        let h = harness();
        let caregiver = h.live_caregiver("kay@example.com");
        h.identity.set(Some(caregiver));
        h.caregivers.set_active(false, None).unwrap();

        assert!(h.service.list_live().is_empty());
    }

    #[test]
    fn listing_is_fresh_within_the_window_and_stale_after() {
        let h = harness();
        h.live_caregiver("kay@example.com");

        h.clock.advance_secs(FRESHNESS_WINDOW_SECS - 1);
        assert_eq!(h.service.list_live().len(), 1);

        h.clock.advance_secs(2);
        assert!(h.service.list_live().is_empty());
        // The record itself survives; only the view drops it
        assert_eq!(h.store.read().availability_records.len(), 1);
    }

    #[test]
    fn exactly_at_the_window_boundary_is_stale() {
        let h = harness();
        h.live_caregiver("kay@example.com");

        h.clock.advance_secs(FRESHNESS_WINDOW_SECS);

        assert!(h.service.list_live().is_empty());
    }

    #[test]
    fn most_recently_seen_comes_first() {
        let h = harness();
        let early = h.live_caregiver("early@example.com");
        h.clock.advance_secs(30);
        let late = h.live_caregiver("late@example.com");

        let live = h.service.list_live();

        assert_eq!(live.len(), 2);
        assert_eq!(live[0].user.id, late);
        assert_eq!(live[1].user.id, early);
    }

    #[test]
    fn reactivation_refreshes_the_check_in() {
        let h = harness();
        let early = h.live_caregiver("early@example.com");
        h.clock.advance_secs(30);
        let late = h.live_caregiver("late@example.com");

        h.clock.advance_secs(30);
        h.identity.set(Some(early));
        h.caregivers.set_active(true, None).unwrap();

        let live = h.service.list_live();
        assert_eq!(live[0].user.id, early);
        assert_eq!(live[1].user.id, late);
    }
}

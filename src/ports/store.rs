//! Store Port - Interface for the authoritative snapshot container.
//!
//! Every business operation goes through this contract: read the committed
//! snapshot, or apply one mutation as a unit. There is no finer-grained
//! access; atomicity comes from validating preconditions before `mutate`
//! and never failing inside it.

use crate::domain::snapshot::Snapshot;

/// Port for reading and atomically mutating the world state.
///
/// `mutate` applies the closure to a working copy and commits the result as
/// one unit; readers only ever observe committed snapshots. The closure is
/// taken as `&mut dyn FnMut` so the trait stays object-safe.
pub trait Store: Send + Sync {
    /// Returns the latest committed snapshot.
    fn read(&self) -> Snapshot;

    /// Applies one mutation and returns the committed result.
    ///
    /// The closure must not fail: callers validate every precondition
    /// against a fresh read before mutating, so the closure only ever
    /// performs writes that are already known to be legal.
    fn mutate(&self, mutation: &mut dyn FnMut(&mut Snapshot)) -> Snapshot;
}

//! In-Memory Store Adapter
//!
//! Holds the committed snapshot behind an `RwLock`. Mutations are applied
//! to a working copy and swapped in while the write lock is held, so
//! readers only ever observe committed snapshots and mutations serialize
//! with each other.

use std::sync::RwLock;

use crate::domain::snapshot::Snapshot;
use crate::ports::Store;

/// In-memory store for the world snapshot.
///
/// The standard in-process store. Mutations clone the committed snapshot,
/// apply the closure, then swap the result in as one unit.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned, which only happens
/// after another thread panicked mid-mutation; the snapshot is not
/// trustworthy at that point.
pub struct MemoryStore {
    snapshot: RwLock<Snapshot>,
}

impl MemoryStore {
    /// Creates a store holding the empty snapshot.
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot::new())
    }

    /// Creates a store holding a previously committed snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    /// Resets the store to the empty snapshot (for test isolation).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        *self
            .snapshot
            .write()
            .expect("MemoryStore: snapshot write lock poisoned") = Snapshot::new();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn read(&self) -> Snapshot {
        self.snapshot
            .read()
            .expect("MemoryStore: snapshot lock poisoned")
            .clone()
    }

    fn mutate(&self, mutation: &mut dyn FnMut(&mut Snapshot)) -> Snapshot {
        let mut guard = self
            .snapshot
            .write()
            .expect("MemoryStore: snapshot write lock poisoned");

        let mut working = guard.clone();
        mutation(&mut working);
        *guard = working.clone();
        working
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EmailAddress, Timestamp, UserId};
    use crate::domain::user::User;

    fn some_user(email: &str) -> User {
        User::register(
            UserId::new(),
            EmailAddress::new(email).unwrap(),
            "Test",
            "User",
            Timestamp::now(),
        )
    }

    #[test]
    fn new_store_reads_empty() {
        let store = MemoryStore::new();

        let snapshot = store.read();

        assert!(snapshot.users.is_empty());
        assert!(snapshot.current_actor_id.is_none());
    }

    #[test]
    fn mutate_commits_and_returns_the_result() {
        let store = MemoryStore::new();
        let user = some_user("a@example.com");
        let id = user.id;

        let committed = store.mutate(&mut |s| s.users.push(user.clone()));

        assert_eq!(committed.users.len(), 1);
        assert_eq!(store.read().user(id).unwrap().id, id);
    }

    #[test]
    fn mutations_accumulate() {
        let store = MemoryStore::new();

        store.mutate(&mut |s| s.users.push(some_user("one@example.com")));
        store.mutate(&mut |s| s.users.push(some_user("two@example.com")));

        assert_eq!(store.read().users.len(), 2);
    }

    #[test]
    fn read_returns_a_detached_copy() {
        let store = MemoryStore::new();
        store.mutate(&mut |s| s.users.push(some_user("a@example.com")));

        let mut copy = store.read();
        copy.users.clear();

        assert_eq!(store.read().users.len(), 1);
    }

    #[test]
    fn clear_resets_to_empty() {
        let store = MemoryStore::new();
        store.mutate(&mut |s| s.users.push(some_user("a@example.com")));

        store.clear();

        assert!(store.read().users.is_empty());
    }
}

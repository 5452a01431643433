//! Persistent Store Adapter
//!
//! Write-through composition: an in-memory store fronted by a
//! `SnapshotStorage` backend. Every committed mutation is persisted; the
//! in-memory commit is authoritative and is never rolled back when
//! persistence fails, because the `Store` contract has no failure channel.

use std::sync::Arc;

use tracing::{error, warn};

use crate::adapters::store::MemoryStore;
use crate::domain::snapshot::Snapshot;
use crate::ports::{SnapshotStorage, Store};

/// Store that persists every committed snapshot.
pub struct PersistentStore {
    inner: MemoryStore,
    storage: Arc<dyn SnapshotStorage>,
}

impl PersistentStore {
    /// Opens the store, seeding memory from the persisted snapshot.
    ///
    /// A missing or unreadable document yields the empty snapshot; an
    /// unreadable one is additionally logged, since it usually means the
    /// file was edited by hand.
    pub fn open(storage: Arc<dyn SnapshotStorage>) -> Self {
        let snapshot = storage.load().unwrap_or_else(|err| {
            warn!(error = %err, "could not load persisted snapshot, starting empty");
            Snapshot::new()
        });

        Self {
            inner: MemoryStore::with_snapshot(snapshot),
            storage,
        }
    }
}

impl Store for PersistentStore {
    fn read(&self) -> Snapshot {
        self.inner.read()
    }

    fn mutate(&self, mutation: &mut dyn FnMut(&mut Snapshot)) -> Snapshot {
        let committed = self.inner.mutate(mutation);

        if let Err(err) = self.storage.persist(&committed) {
            error!(error = %err, "failed to persist committed snapshot");
        }

        committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::FileSnapshotStorage;
    use crate::domain::foundation::{EmailAddress, Timestamp, UserId};
    use crate::domain::user::User;
    use tempfile::TempDir;

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
    fn open_on_missing_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(FileSnapshotStorage::new(temp_dir.path().join("state.json")));

        let store = PersistentStore::open(storage);

        assert!(store.read().users.is_empty());
    }

    #[test]
    fn mutations_survive_a_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let user = some_user("durable@example.com");
        let id = user.id;

        {
            let store = PersistentStore::open(Arc::new(FileSnapshotStorage::new(&path)));
            store.mutate(&mut |s| s.users.push(user.clone()));
        }

        let reopened = PersistentStore::open(Arc::new(FileSnapshotStorage::new(&path)));

        assert_eq!(reopened.read().user(id).unwrap().id, id);
    }

    #[test]
    fn open_on_corrupt_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = PersistentStore::open(Arc::new(FileSnapshotStorage::new(&path)));

        assert!(store.read().users.is_empty());
    }

    #[test]
    fn commit_wins_even_when_persistence_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the target path makes every rename fail.
        let path = temp_dir.path().join("state.json");
        std::fs::create_dir(&path).unwrap();

        let store = PersistentStore::open(Arc::new(FileSnapshotStorage::new(&path)));
        let committed = store.mutate(&mut |s| s.users.push(some_user("kept@example.com")));

        assert_eq!(committed.users.len(), 1);
        assert_eq!(store.read().users.len(), 1);
    }
}

//! Snapshot Storage Port - Interface for persisting the world state.
//!
//! This port defines how the committed snapshot is saved and loaded,
//! supporting file-based storage today and anything document-shaped later.
//! Its failures never enter the business error taxonomy: a store adapter
//! decides how to react to them.

use crate::domain::snapshot::Snapshot;

/// Errors that can occur during snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStorageError {
    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading the committed snapshot
pub trait SnapshotStorage: Send + Sync {
    /// Load the persisted snapshot.
    ///
    /// # Returns
    /// The stored snapshot; an empty snapshot if none was ever persisted
    ///
    /// # Errors
    /// Returns `SnapshotStorageError` if the document exists but cannot be
    /// read or decoded
    fn load(&self) -> Result<Snapshot, SnapshotStorageError>;

    /// Persist one committed snapshot as a unit.
    ///
    /// # Errors
    /// Returns `SnapshotStorageError` if encoding or writing fails
    fn persist(&self, snapshot: &Snapshot) -> Result<(), SnapshotStorageError>;
}

//! Snapshot Storage Adapters
//!
//! Implementations of the SnapshotStorage port for persisting the world
//! snapshot.
//!
//! ## Available Adapters
//!
//! - **FileSnapshotStorage** - One JSON document on disk, written atomically
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::FileSnapshotStorage;
//!
//! let storage = FileSnapshotStorage::new("./data/pawmatch.json");
//! ```

mod file_snapshot_storage;

pub use file_snapshot_storage::FileSnapshotStorage;

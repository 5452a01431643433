//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Store` - Atomic read/mutate access to the world snapshot
//! - `IdentityResolver` - Resolves the acting user
//! - `Clock` - Wall-clock time, injectable for tests
//! - `CoordinateSource` - Caregiver map placement
//! - `SnapshotStorage` - Persisting the committed snapshot

mod clock;
mod coordinates;
mod identity;
mod snapshot_storage;
mod store;

pub use clock::Clock;
pub use coordinates::CoordinateSource;
pub use identity::IdentityResolver;
pub use snapshot_storage::{SnapshotStorage, SnapshotStorageError};
pub use store::Store;

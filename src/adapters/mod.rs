//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `store` - Snapshot containers (in-memory, write-through persistent)
//! - `storage` - Snapshot persistence (JSON document on disk)
//! - `clock` - Wall-clock and test-controlled time
//! - `coordinates` - Caregiver placement (random, seeded, fixed)
//! - `identity` - Actor resolution (preset, store-backed)

pub mod clock;
pub mod coordinates;
pub mod identity;
pub mod storage;
pub mod store;

pub use clock::{ManualClock, SystemClock};
pub use coordinates::{FixedCoordinates, RandomCoordinates, SeededCoordinates};
pub use identity::{FixedIdentity, StoreIdentity};
pub use storage::FileSnapshotStorage;
pub use store::{MemoryStore, PersistentStore};

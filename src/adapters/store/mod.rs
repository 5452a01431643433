//! Store adapters.
//!
//! Implementations of the Store port.
//!
//! ## Available Adapters
//!
//! - `MemoryStore` - In-memory, the standard in-process store
//! - `PersistentStore` - Memory store with write-through snapshot persistence

mod memory;
mod persistent;

pub use memory::MemoryStore;
pub use persistent::PersistentStore;

//! Identity adapters.
//!
//! Implementations of the IdentityResolver port.
//!
//! ## Available Adapters
//!
//! - `FixedIdentity` - Preset actor, switchable between calls
//! - `StoreIdentity` - Follows the snapshot's `current_actor_id` pointer

mod fixed;
mod store_backed;

pub use fixed::FixedIdentity;
pub use store_backed::StoreIdentity;

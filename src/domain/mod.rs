//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `user` - Accounts, roles, and registration rules
//! - `pet` - Owner-scoped animal records
//! - `caregiver` - Caregiver application lifecycle and profile state machine
//! - `availability` - Caregiver placement records and the liveness window
//! - `matching` - Swipe reactions between owners and caregivers
//! - `reputation` - Ratings, like/dislike reaction sets, and comment threads
//! - `feed` - Community posts with reactions and comments
//! - `messaging` - Direct messages between users
//! - `snapshot` - The authoritative world state and its lookup rules

pub mod availability;
pub mod caregiver;
pub mod feed;
pub mod foundation;
pub mod matching;
pub mod messaging;
pub mod pet;
pub mod reputation;
pub mod snapshot;
pub mod user;

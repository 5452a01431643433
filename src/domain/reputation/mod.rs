//! Reputation: ratings, reactions, and comment threads.
//!
//! - `reaction` - The mutually-exclusive like/dislike toggle sets
//! - `review` - Review aggregate and its comment thread entries

mod reaction;
mod review;

pub use reaction::{ReactionKind, ReactionSets};
pub use review::{Review, ReviewComment};

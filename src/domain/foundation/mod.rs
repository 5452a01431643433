//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the PawMatch domain.

mod email;
mod errors;
mod ids;
mod ownership;
mod rating;
mod role;
mod state_machine;
mod timestamp;

pub use email::EmailAddress;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    MessageId, PetId, PostCommentId, PostId, ReviewCommentId, ReviewId, SwipeId, UserId,
};
pub use ownership::OwnedByUser;
pub use rating::Rating;
pub use role::Role;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

//! Ownership trait for user-owned resources.
//!
//! Pets and feed posts are mutable/deletable only by the user who created
//! them. Implementing `OwnedByUser` gives those aggregates a shared
//! `check_ownership()` with a properly formed `Forbidden` error instead of
//! ad-hoc comparisons at every call site.

use super::{DomainError, ErrorCode, UserId};

/// Trait for aggregates that have a single owner.
///
/// Implementors return the `UserId` of the owning user; the trait
/// provides default implementations for ownership checking.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning an error if the user is not the owner.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let pet = snapshot.pet(pet_id)
    ///     .ok_or_else(|| DomainError::not_found("Pet", pet_id))?;
    ///
    /// // Returns Err(Forbidden) if the actor is not the owner
    /// pet.check_ownership(&actor.id)?;
    /// ```
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User does not own this resource",
            )
            .with_detail("owner_id", self.owner_id().to_string())
            .with_detail("requested_by", user_id.to_string()))
        }
    }
}

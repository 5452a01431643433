//! Pet records, owner-scoped.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    OwnedByUser, PetId, Timestamp, UserId, ValidationError,
};

/// An animal registered by an owner.
///
/// Mutable and deletable only by its owner. `age` and `needs` are
/// free-form text straight from the owner ("3 years", "two walks a day").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Unique identifier.
    pub id: PetId,

    /// The owning user.
    pub owner_user_id: UserId,

    /// Required display name.
    pub name: String,

    /// Species label; empty means unspecified.
    pub species: String,

    /// Free-form age description.
    pub age: String,

    /// Care instructions.
    pub needs: String,

    /// Photo reference (URL or data URI); empty means none.
    pub photo: String,

    /// When the record was created.
    pub created_at: Timestamp,
}

/// Field-wise patch for [`Pet::apply_update`]. `None` keeps the stored
/// value.
#[derive(Debug, Clone, Default)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<String>,
    pub needs: Option<String>,
    pub photo: Option<String>,
}

impl Pet {
    /// Creates a pet record. The name is required after trimming.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PetId,
        owner_user_id: UserId,
        name: impl Into<String>,
        species: impl Into<String>,
        age: impl Into<String>,
        needs: impl Into<String>,
        photo: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            owner_user_id,
            name,
            species: species.into().trim().to_string(),
            age: age.into().trim().to_string(),
            needs: needs.into().trim().to_string(),
            photo: photo.into(),
            created_at: now,
        })
    }

    /// Applies a field-wise update; unsupplied fields are kept.
    ///
    /// The name rule from construction still holds: supplying an empty
    /// name is rejected.
    pub fn apply_update(&mut self, update: PetUpdate) -> Result<(), ValidationError> {
        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
            self.name = name;
        }
        if let Some(species) = update.species {
            self.species = species.trim().to_string();
        }
        if let Some(age) = update.age {
            self.age = age.trim().to_string();
        }
        if let Some(needs) = update.needs {
            self.needs = needs.trim().to_string();
        }
        if let Some(photo) = update.photo {
            self.photo = photo;
        }
        Ok(())
    }
}

impl OwnedByUser for Pet {
    fn owner_id(&self) -> &UserId {
        &self.owner_user_id
    }
}

//! Owner-scoped pet registry.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, OwnedByUser, PetId, UserId};
use crate::domain::pet::{Pet, PetUpdate};
use crate::ports::{Clock, IdentityResolver, Store};

use super::require_actor;

/// A new pet record as submitted from the boundary layer.
#[derive(Debug, Clone, Default)]
pub struct AddPetCommand {
    pub name: String,
    pub species: String,
    pub age: String,
    pub needs: String,
    pub photo: String,
}

/// Pet CRUD, scoped to the owning user.
pub struct PetService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityResolver>,
    clock: Arc<dyn Clock>,
}

impl PetService {
    pub fn new(
        store: Arc<dyn Store>,
        identity: Arc<dyn IdentityResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            identity,
            clock,
        }
    }

    /// Registers a pet owned by the actor. The name is required after
    /// trimming; everything else is free-form text.
    pub fn add_pet(&self, command: AddPetCommand) -> Result<Pet, DomainError> {
        // 1. Resolve the actor
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;

        // 2. Validate the record, then commit
        let now = self.clock.now();
        let pet = Pet::new(
            PetId::new(),
            actor.id,
            command.name,
            command.species,
            command.age,
            command.needs,
            command.photo,
            now,
        )?;
        self.store.mutate(&mut |snapshot| {
            snapshot.pets.push(pet.clone());
        });

        info!(user_id = %actor.id, pet = %pet.id, "pet registered");
        Ok(pet)
    }

    /// Applies a field-wise update to the actor's own pet; unsupplied
    /// fields are kept.
    pub fn update_pet(&self, pet_id: PetId, update: PetUpdate) -> Result<Pet, DomainError> {
        // 1. Resolve the actor and the pet
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        let mut pet = snapshot
            .pet(pet_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Pet", pet_id))?;

        // 2. Only the owner may edit
        if let Err(err) = pet.check_ownership(&actor.id) {
            warn!(user_id = %actor.id, pet = %pet_id, "pet update by non-owner refused");
            return Err(err);
        }

        // 3. Validate the patch on a copy, then commit the whole record
        pet.apply_update(update)?;
        self.store.mutate(&mut |snapshot| {
            if let Some(stored) = snapshot.pet_mut(pet_id) {
                *stored = pet.clone();
            }
        });

        info!(user_id = %actor.id, pet = %pet_id, "pet updated");
        Ok(pet)
    }

    /// Deletes the actor's own pet.
    pub fn delete_pet(&self, pet_id: PetId) -> Result<(), DomainError> {
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        let pet = snapshot
            .pet(pet_id)
            .ok_or_else(|| DomainError::not_found("Pet", pet_id))?;

        if let Err(err) = pet.check_ownership(&actor.id) {
            warn!(user_id = %actor.id, pet = %pet_id, "pet deletion by non-owner refused");
            return Err(err);
        }

        self.store.mutate(&mut |snapshot| {
            snapshot.remove_pet(pet_id);
        });

        info!(user_id = %actor.id, pet = %pet_id, "pet deleted");
        Ok(())
    }

    /// All pets of one owner, newest first. Free read; no actor
    /// requirement.
    pub fn pets_of(&self, owner: UserId) -> Vec<Pet> {
        let snapshot = self.store.read();
        let pets: Vec<Pet> = snapshot.pets_of(owner).into_iter().rev().cloned().collect();
        debug!(owner = %owner, count = pets.len(), "listed pets");
        pets
    }
}

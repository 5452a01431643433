//! Store-backed Identity Adapter
//!
//! Resolves the actor from the snapshot's own `current_actor_id` pointer.
//! This is the browser-mirror arrangement: sign-in writes the pointer into
//! the snapshot, and identity resolution reads it back out.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::ports::{IdentityResolver, Store};

/// Identity resolver that follows the snapshot's actor pointer.
pub struct StoreIdentity {
    store: Arc<dyn Store>,
}

impl StoreIdentity {
    /// Creates a resolver reading from the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl IdentityResolver for StoreIdentity {
    fn current_actor_id(&self) -> Option<UserId> {
        self.store.read().current_actor_id
    }
}

//! Fixed Identity Adapter
//!
//! Resolves a preset actor. Stands in for whatever session mechanism the
//! boundary layer brings, and lets tests switch actors between calls.

use std::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::ports::IdentityResolver;

/// Identity resolver holding an explicit actor.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. This is acceptable for
/// test code, which is this adapter's audience.
#[derive(Debug, Default)]
pub struct FixedIdentity {
    actor: Mutex<Option<UserId>>,
}

impl FixedIdentity {
    /// Creates a resolver with nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            actor: Mutex::new(None),
        }
    }

    /// Creates a resolver already acting as the given user.
    pub fn acting_as(user_id: UserId) -> Self {
        Self {
            actor: Mutex::new(Some(user_id)),
        }
    }

    /// Switches the actor; `None` signs out.
    pub fn set(&self, actor: Option<UserId>) {
        *self.actor.lock().expect("FixedIdentity: actor lock poisoned") = actor;
    }
}

impl IdentityResolver for FixedIdentity {
    fn current_actor_id(&self) -> Option<UserId> {
        *self.actor.lock().expect("FixedIdentity: actor lock poisoned")
    }
}

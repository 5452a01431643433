//! Sign-in, sign-out and account provisioning.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, EmailAddress, Role, UserId};
use crate::domain::user::User;
use crate::ports::{Clock, IdentityResolver, Store};

/// Email-only access control.
///
/// There are no passwords: presenting an email signs the account in,
/// registering it on the spot when it has never been seen before. Lookup
/// is case-insensitive, so `Ana@Example.com` and `ana@example.com` are
/// the same account.
pub struct AccessService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityResolver>,
    clock: Arc<dyn Clock>,
}

impl AccessService {
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

    /// Signs an account in, registering it first when the email is unknown.
    ///
    /// New accounts always start with the `Client` role; the given names are
    /// only used at registration time and never overwrite an existing
    /// account's names.
    pub fn sign_in(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, DomainError> {
        // 1. Validate the email before touching the store
        let email = EmailAddress::new(email)?;

        // 2. Prepare a registration in case the account is new
        let now = self.clock.now();
        let prepared = User::register(UserId::new(), email.clone(), first_name, last_name, now);

        // 3. Resolve-or-register and point the actor at the account
        let committed = self.store.mutate(&mut |snapshot| {
            let id = match snapshot.user_by_email(&email) {
                Some(existing) => existing.id,
                None => {
                    snapshot.users.push(prepared.clone());
                    prepared.id
                }
            };
            snapshot.current_actor_id = Some(id);
        });

        let user = committed
            .current_user()
            .cloned()
            .ok_or_else(DomainError::unauthenticated)?;

        info!(
            user_id = %user.id,
            email = %user.email,
            registered = (user.id == prepared.id),
            "user signed in"
        );
        Ok(user)
    }

    /// Clears the current actor. Signing out an anonymous session is a no-op.
    pub fn sign_out(&self) {
        self.store.mutate(&mut |snapshot| {
            snapshot.current_actor_id = None;
        });
        info!("actor signed out");
    }

    /// Returns the acting user, or `None` when nobody is signed in.
    pub fn current_user(&self) -> Option<User> {
        let snapshot = self.store.read();
        let user = self
            .identity
            .current_actor_id()
            .and_then(|id| snapshot.user(id).cloned());
        debug!(found = user.is_some(), "resolved current user");
        user
    }

    /// Creates or updates an account with an explicit role.
    ///
    /// This is the trusted bootstrap path used to seed staff accounts; it
    /// bypasses the caregiver vetting lifecycle, which is the only other way
    /// a role can change. Provisioning an existing email updates the role in
    /// place and leaves everything else untouched.
    pub fn provision_user(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: Role,
    ) -> Result<User, DomainError> {
        // 1. Validate the email before touching the store
        let email = EmailAddress::new(email)?;

        // 2. Prepare the account in case the email is new
        let now = self.clock.now();
        let prepared = User::provision(
            UserId::new(),
            email.clone(),
            first_name,
            last_name,
            role,
            now,
        );

        // 3. Create, or update the role in place
        let committed = self.store.mutate(&mut |snapshot| {
            let existing = snapshot.user_by_email(&email).map(|user| user.id);
            match existing {
                Some(id) => {
                    if let Some(user) = snapshot.user_mut(id) {
                        user.role = role;
                    }
                }
                None => snapshot.users.push(prepared.clone()),
            }
        });

        let user = committed
            .user_by_email(&email)
            .cloned()
            .ok_or_else(|| DomainError::not_found("User", email.as_str()))?;

        info!(user_id = %user.id, role = %user.role, "user provisioned");
        Ok(user)
    }
}

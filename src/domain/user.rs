//! User account entity.
//!
//! Users are created three ways: explicit registration, auto-provisioning
//! as a message recipient stub, and the trusted bootstrap path for staff
//! accounts. Role is never written directly by clients; the caregiver
//! role arrives only through an approval decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, Role, Timestamp, UserId};

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: UserId,

    /// Normalized email, unique across the snapshot.
    pub email: EmailAddress,

    /// Given name; may be empty for stub accounts created by email.
    pub first_name: String,

    /// Family name; may be empty for stub accounts created by email.
    pub last_name: String,

    /// Account role; transitions only via the caregiver lifecycle or
    /// the trusted provisioning path.
    pub role: Role,

    /// When the account was created.
    pub created_at: Timestamp,
}

impl User {
    /// Creates a freshly registered account. Registration always yields
    /// role `Client`.
    pub fn register(
        id: UserId,
        email: EmailAddress,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            role: Role::Client,
            created_at: now,
        }
    }

    /// Creates a stub account for an unknown message recipient.
    ///
    /// Placeholder names mark the account as auto-provisioned until the
    /// recipient signs in and completes it.
    pub fn stub(id: UserId, email: EmailAddress, now: Timestamp) -> Self {
        Self {
            id,
            email,
            first_name: "New".to_string(),
            last_name: "User".to_string(),
            role: Role::Client,
            created_at: now,
        }
    }

    /// Creates an account with an explicit role.
    ///
    /// Bootstrap-only: this is how staff accounts come to exist. Not
    /// reachable from any actor-facing operation.
    pub fn provision(
        id: UserId,
        email: EmailAddress,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            role,
            created_at: now,
        }
    }

    /// Grants the caregiver role.
    ///
    /// The documented side effect of an approval decision; idempotent for
    /// an already-approved caregiver being re-approved.
    pub fn promote_to_caregiver(&mut self) {
        self.role = Role::Caregiver;
    }

    /// Display name for listings; falls back to the email when both name
    /// fields are empty.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.to_string()
        } else {
            full.to_string()
        }
    }

    /// Returns true for accounts allowed to review caregiver applications.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_email(raw: &str) -> EmailAddress {
        EmailAddress::new(raw).unwrap()
    }

    #[test]
    fn register_always_yields_client_role() {
        let user = User::register(
            UserId::new(),
            test_email("dana@example.com"),
            "Dana",
            "Reyes",
            Timestamp::now(),
        );

        assert_eq!(user.role, Role::Client);
        assert_eq!(user.first_name, "Dana");
    }

    #[test]
    fn register_trims_name_fields() {
        let user = User::register(
            UserId::new(),
            test_email("dana@example.com"),
            "  Dana ",
            " Reyes  ",
            Timestamp::now(),
        );

        assert_eq!(user.display_name(), "Dana Reyes");
    }

    #[test]
    fn stub_carries_placeholder_names_and_client_role() {
        let user = User::stub(UserId::new(), test_email("new@example.com"), Timestamp::now());

        assert_eq!(user.first_name, "New");
        assert_eq!(user.last_name, "User");
        assert_eq!(user.role, Role::Client);
    }

    #[test]
    fn provision_keeps_the_requested_role() {
        let user = User::provision(
            UserId::new(),
            test_email("ops@pawmatch.app"),
            "Avery",
            "Quinn",
            Role::Employee,
            Timestamp::now(),
        );

        assert_eq!(user.role, Role::Employee);
        assert!(user.is_staff());
    }

    #[test]
    fn promote_to_caregiver_changes_role() {
        let mut user = User::register(
            UserId::new(),
            test_email("sam@example.com"),
            "Sam",
            "Ide",
            Timestamp::now(),
        );

        user.promote_to_caregiver();
        assert_eq!(user.role, Role::Caregiver);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = User::register(
            UserId::new(),
            test_email("bare@example.com"),
            "",
            "",
            Timestamp::now(),
        );
        assert_eq!(user.display_name(), "bare@example.com");

        user.first_name = "Bea".to_string();
        assert_eq!(user.display_name(), "Bea");
    }
}

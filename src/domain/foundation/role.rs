//! User role enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role.
///
/// Roles are never written directly by clients: `Caregiver` is granted by
/// an approval decision, and staff roles come from the trusted
/// provisioning path only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Default role for every registered or auto-provisioned account.
    Client,

    /// A user approved to offer pet-sitting services.
    Caregiver,

    /// Staff member who reviews caregiver applications.
    Employee,

    /// Staff member with full review powers.
    Admin,
}

impl Role {
    /// Returns true for roles allowed to review caregiver applications.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Employee | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Client => "client",
            Role::Caregiver => "caregiver",
            Role::Employee => "employee",
            Role::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

//! Bootstrap account configuration

use serde::Deserialize;

use crate::domain::foundation::Role;

use super::error::ValidationError;

/// One account to provision at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAccount {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Staff accounts provisioned through the trusted path at startup
///
/// Empty emails disable the corresponding account. Roles are fixed per
/// slot; an operator cannot configure a client into a staff role here.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    /// Admin account email; empty to skip
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Employee (application reviewer) account email; empty to skip
    #[serde(default = "default_employee_email")]
    pub employee_email: String,
}

impl BootstrapConfig {
    /// The accounts to provision, in provisioning order
    pub fn accounts(&self) -> Vec<BootstrapAccount> {
        let mut accounts = Vec::new();
        if !self.admin_email.is_empty() {
            accounts.push(BootstrapAccount {
                email: self.admin_email.clone(),
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                role: Role::Admin,
            });
        }
        if !self.employee_email.is_empty() {
            accounts.push(BootstrapAccount {
                email: self.employee_email.clone(),
                first_name: "Employee".to_string(),
                last_name: "User".to_string(),
                role: Role::Employee,
            });
        }
        accounts
    }

    /// Validate bootstrap configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for email in [&self.admin_email, &self.employee_email] {
            if !email.is_empty() && !email.contains('@') {
                return Err(ValidationError::InvalidBootstrapEmail(email.clone()));
            }
        }
        Ok(())
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            employee_email: default_employee_email(),
        }
    }
}

fn default_admin_email() -> String {
    "admin@animalsitter.co".to_string()
}

fn default_employee_email() -> String {
    "employee@animalsitter.co".to_string()
}

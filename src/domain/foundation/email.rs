//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A normalized email address.
///
/// Trimmed and lowercased on construction, so the case-insensitive
/// uniqueness rule for users reduces to plain equality everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a normalized EmailAddress, returning error if empty or
    /// structurally invalid.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let normalized = raw.into().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !normalized.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(Self(normalized))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims_on_construction() {
        let email = EmailAddress::new("  Dana@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "dana@example.com");
    }

    #[test]
    fn differently_cased_addresses_compare_equal() {
        let a = EmailAddress::new("kim@pawmatch.app").unwrap();
        let b = EmailAddress::new("KIM@PawMatch.App").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(EmailAddress::new("   ").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn rejects_address_without_at_symbol() {
        let result = EmailAddress::new("not-an-email");
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "email"),
            _ => panic!("Expected InvalidFormat error"),
        }
    }

    #[test]
    fn serializes_as_bare_string() {
        let email = EmailAddress::new("dana@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"dana@example.com\"");
    }
}

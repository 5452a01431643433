//! Clock Port - Interface for reading wall-clock time.
//!
//! All liveness math compares stored timestamps against an injected "now",
//! so tests can drive time forward without sleeping.

use crate::domain::foundation::Timestamp;

/// Port for the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

//! Manual Clock Adapter
//!
//! A clock that only moves when told to. Lets tests cross the liveness
//! window without sleeping.

use std::sync::Mutex;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock under test control.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. This is acceptable for
/// test code, which is this adapter's audience.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    /// Creates a clock frozen at the given instant.
    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to an absolute instant.
    pub fn set(&self, now: Timestamp) {
        *self.now.lock().expect("ManualClock: time lock poisoned") = now;
    }

    /// Moves the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().expect("ManualClock: time lock poisoned");
        *now = now.plus_secs(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().expect("ManualClock: time lock poisoned")
    }
}

//! System Clock Adapter
//!
//! Reads real wall-clock time. The production clock.

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock backed by the operating system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates the system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock::new();

        let first = clock.now();
        let second = clock.now();

        assert!(!second.is_before(&first));
    }
}

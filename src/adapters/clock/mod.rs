//! Clock adapters.
//!
//! Implementations of the Clock port.
//!
//! ## Available Adapters
//!
//! - `SystemClock` - Real wall-clock time for production
//! - `ManualClock` - Test-controlled time for liveness scenarios

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

//! Coordinate adapters.
//!
//! Implementations of the CoordinateSource port.
//!
//! ## Available Adapters
//!
//! - `RandomCoordinates` - Thread-local randomness for production
//! - `SeededCoordinates` - Seeded sequence for reproducible tests
//! - `FixedCoordinates` - One pinned position for exact-placement tests

mod fixed;
mod random;

pub use fixed::FixedCoordinates;
pub use random::{RandomCoordinates, SeededCoordinates};

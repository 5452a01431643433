//! Coordinate Port - Interface for caregiver placement.
//!
//! Caregiver positions on the map are drawn from this source when the
//! caller does not supply one. Production draws random positions; tests
//! inject seeded or fixed sources so placement-dependent logic stays
//! deterministic.

use crate::domain::availability::Position;

/// Port for drawing a map position for a caregiver.
pub trait CoordinateSource: Send + Sync {
    /// Returns the next position to place a caregiver at.
    fn next_position(&self) -> Position;
}

//! Fixed Coordinate Adapter
//!
//! Always returns the same position. For tests that assert on exact
//! placement.

use crate::domain::availability::Position;
use crate::ports::CoordinateSource;

/// Coordinate source pinned to one position.
#[derive(Debug, Clone, Copy)]
pub struct FixedCoordinates {
    position: Position,
}

impl FixedCoordinates {
    /// Creates a source that always yields `position`.
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl CoordinateSource for FixedCoordinates {
    fn next_position(&self) -> Position {
        self.position
    }
}

//! Random Coordinate Adapters
//!
//! Draw integer percent positions inset from the map edges, matching the
//! placement grid the map view renders: x in [6, 93], y in [8, 89].

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::availability::Position;
use crate::ports::CoordinateSource;

fn draw(rng: &mut impl Rng) -> Position {
    let x = rng.gen_range(6..94) as f64;
    let y = rng.gen_range(8..90) as f64;
    Position::new(x, y)
}

/// Coordinate source backed by the thread-local generator. The production
/// source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCoordinates;

impl RandomCoordinates {
    /// Creates the random source.
    pub fn new() -> Self {
        Self
    }
}

impl CoordinateSource for RandomCoordinates {
    fn next_position(&self) -> Position {
        draw(&mut rand::thread_rng())
    }
}

/// Coordinate source with a fixed seed. Same seed, same placement
/// sequence, so placement-dependent tests are reproducible.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. This is acceptable for
/// test code, which is this adapter's audience.
#[derive(Debug)]
pub struct SeededCoordinates {
    rng: Mutex<StdRng>,
}

impl SeededCoordinates {
    /// Creates a source seeded with the given value.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CoordinateSource for SeededCoordinates {
    fn next_position(&self) -> Position {
        draw(&mut *self.rng.lock().expect("SeededCoordinates: rng lock poisoned"))
    }
}

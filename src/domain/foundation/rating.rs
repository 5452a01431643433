//! Rating value object (1-5 star scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// One star, the lowest rating.
    pub const MIN: Self = Self(1);

    /// Five stars, the highest rating.
    pub const MAX: Self = Self(5);

    /// Creates a Rating, clamping out-of-range values into [1, 5].
    ///
    /// Ratings arriving from the boundary layer are clamped rather than
    /// rejected; a stored rating is always in range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(1, 5) as u8)
    }

    /// Creates a Rating, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range("rating", 1, 5, value as i32));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Arithmetic mean of the given ratings, rounded to one decimal place.
    ///
    /// Zero ratings yields 0.0, never NaN.
    pub fn average(ratings: &[Rating]) -> f64 {
        if ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = ratings.iter().map(|r| u32::from(r.0)).sum();
        let mean = f64::from(sum) / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

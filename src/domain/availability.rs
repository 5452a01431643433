//! Caregiver availability and the liveness rule.
//!
//! An availability record exists from the moment a caregiver is approved
//! and is refreshed each time they activate. Liveness is evaluated at read
//! time against the freshness window; nothing ever evicts a stale record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Seconds after which an unrefreshed location stops counting as live.
///
/// The single source of truth for liveness; nothing derives a different
/// window from it.
pub const FRESHNESS_WINDOW_SECS: i64 = 600;

/// Maximum number of caregivers a live listing returns.
pub const LIVE_RESULTS_CAP: usize = 50;

/// A caregiver's placement on the city map, in percent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x_pct: f64,
    pub y_pct: f64,
}

impl Position {
    pub fn new(x_pct: f64, y_pct: f64) -> Self {
        Self { x_pct, y_pct }
    }
}

/// Last known placement and check-in time for one caregiver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    /// The caregiver this record belongs to. One record per caregiver.
    pub user_id: UserId,

    /// Where the caregiver last checked in.
    pub position: Position,

    /// When the caregiver last checked in.
    pub last_seen_at: Timestamp,
}

impl AvailabilityRecord {
    /// Creates a record at the moment of first placement.
    pub fn new(user_id: UserId, position: Position, now: Timestamp) -> Self {
        Self {
            user_id,
            position,
            last_seen_at: now,
        }
    }

    /// Re-stamps the record with a fresh placement and check-in time.
    pub fn refresh(&mut self, position: Position, now: Timestamp) {
        self.position = position;
        self.last_seen_at = now;
    }

    /// Returns true while the last check-in is inside the freshness window.
    ///
    /// Strictly inside: a record exactly `FRESHNESS_WINDOW_SECS` old is
    /// already stale.
    pub fn is_live(&self, now: Timestamp) -> bool {
        now.seconds_since(&self.last_seen_at) < FRESHNESS_WINDOW_SECS
    }
}

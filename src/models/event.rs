//! Canonical calendar events.
//!
//! An event is a day-granular, half-open stay `[start, end)`: the departure
//! day itself never consumes a stay-night. Raw records become events through
//! the normalizer; everything downstream (day buckets, room grid, summary)
//! consumes only this canonical form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day::DayKey;

/// Event identifier as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(value: impl Into<String>) -> Self {
        EventId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId(value.to_string())
    }
}

/// Room identifier used as the occupancy grid row key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomKey(pub String);

impl RoomKey {
    /// Sentinel for records with no room assignment. Such events still count
    /// in the day buckets, they are just not attributable to a grid row.
    pub const UNASSIGNED: &'static str = "unassigned";

    pub fn new(value: impl Into<String>) -> Self {
        RoomKey(value.into())
    }

    pub fn unassigned() -> Self {
        RoomKey(Self::UNASSIGNED.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_unassigned(&self) -> bool {
        self.0 == Self::UNASSIGNED
    }
}

impl std::fmt::Display for RoomKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomKey {
    fn from(value: &str) -> Self {
        RoomKey(value.to_string())
    }
}

/// Normalized calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier, the de-duplication key in day buckets
    pub id: EventId,
    /// Room assignment, `RoomKey::unassigned()` when the record had none
    pub room_key: RoomKey,
    /// First occupied day (inclusive)
    pub start: NaiveDate,
    /// Departure day (exclusive) — always strictly after `start`
    pub end: NaiveDate,
    /// Resolved display name used for in-cell ordering, empty when absent
    #[serde(default)]
    pub display_name: String,
    /// Opaque source record payload carried through for display
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Event {
    /// Number of stay-nights, `end - start` in whole days.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Canonical key of the arrival day.
    pub fn start_key(&self) -> DayKey {
        DayKey::from_date(self.start)
    }

    /// Canonical key of the departure day.
    pub fn end_key(&self) -> DayKey {
        DayKey::from_date(self.end)
    }

    /// Intersect the stay with a visible window.
    ///
    /// Returns the clipped half-open range
    /// `[max(start, window_start), min(end, window_end_exclusive))`,
    /// or `None` when the stay does not intersect the window. Every consumer
    /// clips through this single implementation so inclusive/exclusive
    /// boundary handling cannot diverge between views.
    pub fn clip(
        &self,
        window_start: NaiveDate,
        window_end_exclusive: NaiveDate,
    ) -> Option<(NaiveDate, NaiveDate)> {
        let clipped_start = self.start.max(window_start);
        let clipped_end = self.end.min(window_end_exclusive);
        if clipped_start < clipped_end {
            Some((clipped_start, clipped_end))
        } else {
            None
        }
    }
}

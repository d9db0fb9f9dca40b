//! Whole-window KPI totals.
//!
//! The dashboard header cards show one number per window rather than one per
//! day: arrivals, departures, stay-nights, how many stays touch the window
//! at all, and how full the known rooms are. Computed with the same clipping
//! rules as the day buckets and the room grid, so the cards always agree
//! with the cells beneath them.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{day_range, DateWindow, Event, EventId, RoomKey};

/// Window-level totals for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// Stays arriving inside the window
    pub total_arrivals: usize,
    /// Stays departing inside the window
    pub total_departures: usize,
    /// Stay-nights consumed inside the window
    pub total_stay_nights: usize,
    /// Distinct events intersecting the window
    pub distinct_events: usize,
    /// (known room, day) cells holding at least one stay-night
    pub occupied_cells: usize,
    /// Total (known room, day) cells in the window
    pub total_cells: usize,
    /// `occupied_cells / total_cells`, `0.0` for an empty grid
    pub occupancy_rate: f64,
}

/// Compute window totals for the header cards.
///
/// An arrival or departure counts only when its day itself falls inside the
/// window, matching the day-bucket rules; stay-nights are the clipped
/// half-open nights. `distinct_events` de-duplicates by id, the same key the
/// day buckets de-duplicate with. Occupancy counts each known-room cell once
/// however many stays touch it, so a same-day changeover does not push the
/// rate past 1.0.
pub fn summarize_window(
    events: &[Event],
    window: &DateWindow,
    known_rooms: &[RoomKey],
) -> WindowSummary {
    let room_set: BTreeSet<&RoomKey> = known_rooms.iter().collect();
    let total_cells = room_set.len() * window.len();

    let mut total_arrivals = 0;
    let mut total_departures = 0;
    let mut total_stay_nights = 0;
    let mut distinct_ids: BTreeSet<&EventId> = BTreeSet::new();
    let mut occupied: BTreeSet<(&RoomKey, NaiveDate)> = BTreeSet::new();

    if let Some((window_start, window_end)) = window.bounds() {
        for event in events {
            let Some((clip_start, clip_end)) = event.clip(window_start, window_end) else {
                continue;
            };

            distinct_ids.insert(&event.id);
            total_stay_nights += (clip_end - clip_start).num_days() as usize;
            if event.start >= window_start {
                total_arrivals += 1;
            }
            if event.end < window_end {
                total_departures += 1;
            }

            if room_set.contains(&event.room_key) {
                for day in day_range(clip_start, clip_end) {
                    occupied.insert((&event.room_key, day));
                }
            }
        }
    }

    let occupied_cells = occupied.len();
    let occupancy_rate = if total_cells == 0 {
        0.0
    } else {
        occupied_cells as f64 / total_cells as f64
    };

    WindowSummary {
        total_arrivals,
        total_departures,
        total_stay_nights,
        distinct_events: distinct_ids.len(),
        occupied_cells,
        total_cells,
        occupancy_rate,
    }
}

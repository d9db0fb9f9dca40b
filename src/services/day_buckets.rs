//! Per-day aggregation.
//!
//! Turns a normalized event list and a window into one bucket per visible
//! day, carrying arrival, stay and departure counts plus the de-duplicated,
//! display-ordered item list for that day. This feeds the month calendar
//! cells ("3 arrivals, 5 in house, 1 departure").

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::{day_range, DateWindow, DayKey, Event, EventId};
use crate::services::ordering::sort_for_display;

/// Aggregated counts and items for one visible day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Canonical day key
    pub key: DayKey,
    /// Events touching this day, de-duplicated and display-ordered
    pub items: Vec<Event>,
    /// Stays whose arrival falls on this day
    pub arrival_count: usize,
    /// Stay-nights consumed on this day
    pub stay_count: usize,
    /// Stays whose departure falls on this day
    pub departure_count: usize,
}

/// Day buckets keyed by canonical day key.
pub type DayBucketMap = BTreeMap<DayKey, DayBucket>;

#[derive(Default)]
struct BucketAccumulator {
    ids: BTreeSet<EventId>,
    arrival_count: usize,
    stay_count: usize,
    departure_count: usize,
}

/// Aggregate normalized events onto the window's days.
///
/// Every window day gets a bucket, present even when empty. Each event is
/// clipped to the window first; the clipped nights feed `stay_count`, while
/// the arrival and departure days count only when they themselves fall
/// inside the window. The departure day consumes no stay-night. An id set
/// keeps a multi-night stay from appearing twice in one day's item list.
pub fn aggregate_day_buckets(events: &[Event], window: &DateWindow) -> DayBucketMap {
    let mut accumulators: BTreeMap<DayKey, BucketAccumulator> = window
        .days
        .iter()
        .map(|day| (day.key.clone(), BucketAccumulator::default()))
        .collect();

    if let Some((window_start, window_end)) = window.bounds() {
        for event in events {
            let Some((clip_start, clip_end)) = event.clip(window_start, window_end) else {
                continue;
            };

            for day in day_range(clip_start, clip_end) {
                if let Some(acc) = accumulators.get_mut(&DayKey::from_date(day)) {
                    acc.stay_count += 1;
                    acc.ids.insert(event.id.clone());
                }
            }

            // With a non-empty clip, `start < window_end` and
            // `end > window_start` already hold; only the remaining bound
            // needs checking before counting the boundary days.
            if event.start >= window_start {
                if let Some(acc) = accumulators.get_mut(&event.start_key()) {
                    acc.arrival_count += 1;
                    acc.ids.insert(event.id.clone());
                }
            }
            if event.end < window_end {
                if let Some(acc) = accumulators.get_mut(&event.end_key()) {
                    acc.departure_count += 1;
                    acc.ids.insert(event.id.clone());
                }
            }
        }
    }

    materialize(accumulators, events)
}

/// Resolve id sets into sorted item lists.
fn materialize(
    accumulators: BTreeMap<DayKey, BucketAccumulator>,
    events: &[Event],
) -> DayBucketMap {
    let mut index: HashMap<&EventId, &Event> = HashMap::with_capacity(events.len());
    for event in events {
        index.entry(&event.id).or_insert(event);
    }

    accumulators
        .into_iter()
        .map(|(key, acc)| {
            let mut items: Vec<Event> = acc
                .ids
                .iter()
                .filter_map(|id| index.get(id).copied())
                .cloned()
                .collect();
            sort_for_display(&mut items);

            let bucket = DayBucket {
                key: key.clone(),
                items,
                arrival_count: acc.arrival_count,
                stay_count: acc.stay_count,
                departure_count: acc.departure_count,
            };
            (key, bucket)
        })
        .collect()
}

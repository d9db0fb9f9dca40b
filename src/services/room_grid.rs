//! Room-by-day occupancy matrix.
//!
//! One row per known room, one cell per (room, day) pair, every cell present
//! even when empty. Events append to each day their clipped stay covers; a
//! cell holding two events is a legitimate same-day changeover, so cells are
//! true lists rather than sets.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{day_range, DateWindow, DayKey, Event, RoomKey};
use crate::services::ordering::sort_for_display;

/// Room-by-day occupancy matrix over one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomGrid {
    /// Cell lists per room and day, complete for every known (room, day) pair
    pub cells: BTreeMap<RoomKey, BTreeMap<DayKey, Vec<Event>>>,
    /// Window-intersecting events excluded because their room is not known
    pub unknown_room_count: usize,
}

impl RoomGrid {
    /// Events occupying one cell, `None` for an unknown room or day.
    pub fn cell(&self, room: &RoomKey, day: &DayKey) -> Option<&[Event]> {
        self.cells.get(room)?.get(day).map(Vec::as_slice)
    }

    /// Known room keys in row order.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomKey> {
        self.cells.keys()
    }
}

/// Build the occupancy matrix for the known rooms over a window.
///
/// Cells are never pruned: a room with no events still carries one empty
/// list per visible day, so consumers can render a uniform grid. Events
/// pointing at rooms outside `known_rooms` are skipped and counted,
/// mirroring the normalizer's drop-and-count policy. An "unassigned" row
/// appears only when the caller lists [`RoomKey::unassigned`] as a known
/// room.
pub fn assemble_room_grid(
    events: &[Event],
    window: &DateWindow,
    known_rooms: &[RoomKey],
) -> RoomGrid {
    let mut cells: BTreeMap<RoomKey, BTreeMap<DayKey, Vec<Event>>> = known_rooms
        .iter()
        .map(|room| {
            let row: BTreeMap<DayKey, Vec<Event>> = window
                .days
                .iter()
                .map(|day| (day.key.clone(), Vec::new()))
                .collect();
            (room.clone(), row)
        })
        .collect();

    let mut unknown_room_count = 0;

    if let Some((window_start, window_end)) = window.bounds() {
        for event in events {
            let Some((clip_start, clip_end)) = event.clip(window_start, window_end) else {
                continue;
            };

            let Some(row) = cells.get_mut(&event.room_key) else {
                unknown_room_count += 1;
                debug!(
                    "Skipping event id={}: unknown room {}",
                    event.id, event.room_key
                );
                continue;
            };

            for day in day_range(clip_start, clip_end) {
                if let Some(cell) = row.get_mut(&DayKey::from_date(day)) {
                    cell.push(event.clone());
                }
            }
        }
    }

    for row in cells.values_mut() {
        for cell in row.values_mut() {
            sort_for_display(cell);
        }
    }

    RoomGrid {
        cells,
        unknown_room_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventId;
    use crate::services::window::build_span_window;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from_date(date(y, m, d))
    }

    fn create_test_event(id: &str, room: &str, start: NaiveDate, end: NaiveDate) -> Event {
        Event {
            id: EventId::new(id),
            room_key: RoomKey::new(room),
            start,
            end,
            display_name: format!("Guest {}", id),
            attributes: serde_json::Map::new(),
        }
    }

    fn rooms(keys: &[&str]) -> Vec<RoomKey> {
        keys.iter().map(|k| RoomKey::new(*k)).collect()
    }

    fn october_week() -> DateWindow {
        build_span_window(date(2025, 10, 1), 7).unwrap()
    }

    #[test]
    fn test_every_cell_exists_even_when_empty() {
        let window = october_week();
        let grid = assemble_room_grid(&[], &window, &rooms(&["101", "102"]));

        assert_eq!(grid.cells.len(), 2);
        for room in grid.cells.keys() {
            for day in &window.days {
                let cell = grid.cell(room, &day.key);
                assert_eq!(cell, Some(&[][..]));
            }
        }
        assert_eq!(grid.unknown_room_count, 0);
    }

    #[test]
    fn test_events_fill_clipped_days_without_checkout_day() {
        let window = october_week();
        let events = vec![create_test_event(
            "a",
            "101",
            date(2025, 10, 2),
            date(2025, 10, 5),
        )];
        let grid = assemble_room_grid(&events, &window, &rooms(&["101"]));

        let room = RoomKey::new("101");
        assert_eq!(grid.cell(&room, &key(2025, 10, 2)).map(|c| c.len()), Some(1));
        assert_eq!(grid.cell(&room, &key(2025, 10, 3)).map(|c| c.len()), Some(1));
        assert_eq!(grid.cell(&room, &key(2025, 10, 4)).map(|c| c.len()), Some(1));
        // The departure day cell stays empty
        assert_eq!(grid.cell(&room, &key(2025, 10, 5)).map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_event_clips_to_window_edges() {
        let window = october_week();
        let events = vec![create_test_event(
            "a",
            "101",
            date(2025, 9, 25),
            date(2025, 10, 20),
        )];
        let grid = assemble_room_grid(&events, &window, &rooms(&["101"]));

        let room = RoomKey::new("101");
        for day in &window.days {
            assert_eq!(grid.cell(&room, &day.key).map(|c| c.len()), Some(1));
        }
    }

    #[test]
    fn test_unknown_room_is_skipped_and_counted() {
        let window = october_week();
        let events = vec![
            create_test_event("a", "101", date(2025, 10, 1), date(2025, 10, 3)),
            create_test_event("b", "999", date(2025, 10, 1), date(2025, 10, 3)),
        ];
        let grid = assemble_room_grid(&events, &window, &rooms(&["101"]));

        assert_eq!(grid.unknown_room_count, 1);
        assert_eq!(
            grid.cell(&RoomKey::new("101"), &key(2025, 10, 1))
                .map(|c| c.len()),
            Some(1)
        );
        assert!(grid.cell(&RoomKey::new("999"), &key(2025, 10, 1)).is_none());
    }

    #[test]
    fn test_disjoint_unknown_room_event_is_not_counted() {
        // The counter reports events the grid actually excluded, and an event
        // outside the window never reaches room matching
        let window = october_week();
        let events = vec![create_test_event(
            "far",
            "999",
            date(2025, 12, 1),
            date(2025, 12, 3),
        )];
        let grid = assemble_room_grid(&events, &window, &rooms(&["101"]));

        assert_eq!(grid.unknown_room_count, 0);
    }

    #[test]
    fn test_same_day_changeover_cell_holds_both_events() {
        let window = october_week();
        let events = vec![
            create_test_event("arriving", "101", date(2025, 10, 3), date(2025, 10, 5)),
            create_test_event("overlap", "101", date(2025, 10, 2), date(2025, 10, 4)),
        ];
        let grid = assemble_room_grid(&events, &window, &rooms(&["101"]));

        let cell = grid
            .cell(&RoomKey::new("101"), &key(2025, 10, 3))
            .unwrap();
        assert_eq!(cell.len(), 2);
        // Display order: ids tie-break identical room and name prefixes
        assert_eq!(cell[0].id.value(), "arriving");
        assert_eq!(cell[1].id.value(), "overlap");
    }

    #[test]
    fn test_empty_room_row_survives_alongside_busy_rows() {
        let window = october_week();
        let events = vec![create_test_event(
            "a",
            "101",
            date(2025, 10, 1),
            date(2025, 10, 8),
        )];
        let grid = assemble_room_grid(&events, &window, &rooms(&["101", "102"]));

        let idle = RoomKey::new("102");
        for day in &window.days {
            assert_eq!(grid.cell(&idle, &day.key), Some(&[][..]));
        }
    }

    #[test]
    fn test_duplicate_known_rooms_collapse() {
        let window = october_week();
        let grid = assemble_room_grid(&[], &window, &rooms(&["101", "101", "102"]));
        assert_eq!(grid.cells.len(), 2);
    }

    #[test]
    fn test_unassigned_row_when_requested() {
        let window = october_week();
        let mut event = create_test_event("a", "x", date(2025, 10, 1), date(2025, 10, 2));
        event.room_key = RoomKey::unassigned();

        let known = vec![RoomKey::new("101"), RoomKey::unassigned()];
        let grid = assemble_room_grid(&[event], &window, &known);

        assert_eq!(grid.unknown_room_count, 0);
        assert_eq!(
            grid.cell(&RoomKey::unassigned(), &key(2025, 10, 1))
                .map(|c| c.len()),
            Some(1)
        );
    }

    #[test]
    fn test_rooms_iterate_in_sorted_order() {
        let window = october_week();
        let grid = assemble_room_grid(&[], &window, &rooms(&["205", "101", "112"]));

        let order: Vec<&str> = grid.rooms().map(|r| r.value()).collect();
        assert_eq!(order, vec!["101", "112", "205"]);
    }
}

//! Deterministic display ordering.
//!
//! Items sharing a day bucket or grid cell sort by room key, then display
//! name, then event id. The id tie-break guarantees a total order even when
//! two guests share a name, so repeated runs and UI diffs stay stable.

use std::cmp::Ordering;

use crate::models::Event;

/// Three-key lexical comparator for bucket and cell item lists.
pub fn display_order(a: &Event, b: &Event) -> Ordering {
    a.room_key
        .value()
        .cmp(b.room_key.value())
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.id.value().cmp(b.id.value()))
}

/// Sort events in place with [`display_order`].
pub fn sort_for_display(events: &mut [Event]) {
    events.sort_by(display_order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventId, RoomKey};
    use chrono::NaiveDate;

    fn create_test_event(id: &str, room: &str, name: &str) -> Event {
        Event {
            id: EventId::new(id),
            room_key: RoomKey::new(room),
            start: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
            display_name: name.to_string(),
            attributes: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_room_key_is_primary() {
        let a = create_test_event("z", "101", "Zoe");
        let b = create_test_event("a", "102", "Amy");
        assert_eq!(display_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_display_name_breaks_room_tie() {
        let a = create_test_event("z", "101", "Amy");
        let b = create_test_event("a", "101", "Zoe");
        assert_eq!(display_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_id_breaks_name_tie() {
        let a = create_test_event("bk-1", "101", "Amy");
        let b = create_test_event("bk-2", "101", "Amy");
        assert_eq!(display_order(&a, &b), Ordering::Less);
        assert_eq!(display_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_identical_keys_compare_equal() {
        let a = create_test_event("bk-1", "101", "Amy");
        let b = create_test_event("bk-1", "101", "Amy");
        assert_eq!(display_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_sort_for_display() {
        let mut events = vec![
            create_test_event("b", "102", "Amy"),
            create_test_event("a", "101", "Zoe"),
            create_test_event("c", "101", "Amy"),
        ];
        sort_for_display(&mut events);

        let ids: Vec<&str> = events.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unassigned_room_sorts_lexically() {
        // "unassigned" lands after numeric room keys in lexical order
        let a = create_test_event("a", "909", "Amy");
        let b = create_test_event("b", RoomKey::UNASSIGNED, "Amy");
        assert_eq!(display_order(&a, &b), Ordering::Less);
    }
}

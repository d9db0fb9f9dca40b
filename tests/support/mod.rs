//! Shared fixture builders for the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use pms_rust::api::{DateWindow, DayKey, Event, EventId, RoomKey};
use serde_json::{json, Value};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn key(y: i32, m: u32, d: u32) -> DayKey {
    DayKey::from_date(date(y, m, d))
}

pub fn create_event(id: &str, room: &str, start: NaiveDate, end: NaiveDate) -> Event {
    Event {
        id: EventId::new(id),
        room_key: RoomKey::new(room),
        start,
        end,
        display_name: format!("Guest {}", id),
        attributes: serde_json::Map::new(),
    }
}

pub fn rooms(keys: &[&str]) -> Vec<RoomKey> {
    keys.iter().map(|k| RoomKey::new(*k)).collect()
}

/// Seven visible days, 2025-10-01 through 2025-10-07.
pub fn october_week() -> DateWindow {
    pms_rust::api::build_span_window(date(2025, 10, 1), 7).unwrap()
}

/// A raw booking record in the reservation endpoint's shape.
pub fn raw_booking(id: &str, room: &str, check_in: &str, check_out: &str) -> Value {
    json!({
        "id": id,
        "roomNo": room,
        "guestName": format!("Guest {}", id),
        "arrivalDate": check_in,
        "departureDate": check_out,
    })
}

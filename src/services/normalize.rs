//! Record normalization.
//!
//! Raw records arrive with inconsistent field names and date formats.
//! Normalization resolves each logical field through the ordered candidates
//! of a [`FieldMap`], truncates every date to day granularity, and drops
//! anything unusable while counting why. A bad record never fails the batch;
//! the valid days and rooms still render.

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::config::{FieldMap, MissingEndPolicy};
use crate::models::{parse_day, Event, EventId, RoomKey};
use serde::{Deserialize, Serialize};

/// Per-reason counts of records dropped during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionSummary {
    /// Array entries that were not JSON objects
    pub not_an_object: usize,
    /// No usable identifier among the id candidates
    pub missing_id: usize,
    /// No start date among the candidates
    pub missing_start: usize,
    /// Start candidate present but unparsable
    pub unparsable_start: usize,
    /// No end date while the policy rejects single-date records
    pub missing_end: usize,
    /// End candidate present but unparsable
    pub unparsable_end: usize,
    /// Parsed with `start >= end`
    pub inverted_range: usize,
}

impl RejectionSummary {
    /// Total records dropped.
    pub fn total(&self) -> usize {
        self.not_an_object
            + self.missing_id
            + self.missing_start
            + self.unparsable_start
            + self.missing_end
            + self.unparsable_end
            + self.inverted_range
    }
}

/// Result of one normalization pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeOutcome {
    /// Canonical events, in input order
    pub events: Vec<Event>,
    /// Why the remaining records were dropped
    pub rejections: RejectionSummary,
}

/// Convert raw records into canonical events.
///
/// Every record is resolved independently: the first non-empty candidate
/// from the field map wins for each logical field, dates are stripped to
/// their day, a missing room becomes [`RoomKey::unassigned`], and records
/// that cannot yield a valid half-open stay are dropped and counted.
pub fn normalize_events(records: &[Value], field_map: &FieldMap) -> NormalizeOutcome {
    let mut events = Vec::with_capacity(records.len());
    let mut rejections = RejectionSummary::default();

    for record in records {
        let Some(fields) = record.as_object() else {
            rejections.not_an_object += 1;
            debug!("Dropping non-object record");
            continue;
        };

        let Some(id) = first_non_empty(fields, &field_map.id_fields) else {
            rejections.missing_id += 1;
            debug!("Dropping record without an id");
            continue;
        };

        let start = match first_non_empty(fields, &field_map.start_fields) {
            Some(raw) => match parse_day(&raw) {
                Some(start) => start,
                None => {
                    rejections.unparsable_start += 1;
                    debug!("Dropping record id={}: unparsable start {:?}", id, raw);
                    continue;
                }
            },
            None => {
                rejections.missing_start += 1;
                debug!("Dropping record id={}: no start date", id);
                continue;
            }
        };

        let end = match first_non_empty(fields, &field_map.end_fields) {
            Some(raw) => match parse_day(&raw) {
                Some(end) => end,
                None => {
                    rejections.unparsable_end += 1;
                    debug!("Dropping record id={}: unparsable end {:?}", id, raw);
                    continue;
                }
            },
            None => match field_map.missing_end {
                MissingEndPolicy::OneNight => match start.succ_opt() {
                    Some(end) => end,
                    None => {
                        rejections.unparsable_end += 1;
                        continue;
                    }
                },
                MissingEndPolicy::Drop => {
                    rejections.missing_end += 1;
                    debug!("Dropping record id={}: no end date", id);
                    continue;
                }
            },
        };

        if start >= end {
            rejections.inverted_range += 1;
            debug!(
                "Dropping record id={}: start {} is not before end {}",
                id, start, end
            );
            continue;
        }

        let room_key = first_non_empty(fields, &field_map.room_fields)
            .map(RoomKey::new)
            .unwrap_or_else(RoomKey::unassigned);
        let display_name =
            first_non_empty(fields, &field_map.display_fields).unwrap_or_default();

        events.push(Event {
            id: EventId::new(id),
            room_key,
            start,
            end,
            display_name,
            attributes: fields.clone(),
        });
    }

    let dropped = rejections.total();
    if dropped > 0 {
        warn!(
            "Rejected {} of {} records during normalization",
            dropped,
            records.len()
        );
    }

    NormalizeOutcome { events, rejections }
}

/// First candidate field holding a non-empty value.
///
/// Strings are trimmed; numbers are accepted and stringified, matching the
/// loose coercion the record sources rely on. Anything else is skipped.
fn first_non_empty(fields: &Map<String, Value>, candidates: &[String]) -> Option<String> {
    for name in candidates {
        match fields.get(name) {
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

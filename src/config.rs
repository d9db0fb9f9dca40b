//! Normalization field-map configuration.
//!
//! The record sources feeding the calendars disagree on field names: one
//! endpoint says `arrivalDate`, another `checkIn`, a third just `date`. A
//! [`FieldMap`] lists the candidate names per logical field in priority
//! order; during normalization the first non-empty candidate wins. Defaults
//! cover the names the known endpoints emit, and a deployment can override
//! them from a TOML profile.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// What to do with records that carry a start date but no end date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEndPolicy {
    /// Reject the record; reservation views require both endpoints
    #[default]
    Drop,
    /// Keep the record as a one-night stay ending the next day; front-desk
    /// point records carry a single date
    OneNight,
}

/// Ordered field-name candidates for record normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    /// Candidates for the event identifier
    #[serde(default = "default_id_fields")]
    pub id_fields: Vec<String>,
    /// Candidates for the room assignment
    #[serde(default = "default_room_fields")]
    pub room_fields: Vec<String>,
    /// Candidates for the arrival date
    #[serde(default = "default_start_fields")]
    pub start_fields: Vec<String>,
    /// Candidates for the departure date
    #[serde(default = "default_end_fields")]
    pub end_fields: Vec<String>,
    /// Candidates for the display name used when ordering items
    #[serde(default = "default_display_fields")]
    pub display_fields: Vec<String>,
    /// Policy for records missing an end date
    #[serde(default)]
    pub missing_end: MissingEndPolicy,
}

fn default_id_fields() -> Vec<String> {
    vec!["id".to_string(), "_id".to_string(), "bookingNo".to_string()]
}

fn default_room_fields() -> Vec<String> {
    vec![
        "roomCode".to_string(),
        "roomNo".to_string(),
        "room".to_string(),
    ]
}

fn default_start_fields() -> Vec<String> {
    vec![
        "arrivalDate".to_string(),
        "checkIn".to_string(),
        "checkInAt".to_string(),
        "start".to_string(),
        "date".to_string(),
        "when".to_string(),
    ]
}

fn default_end_fields() -> Vec<String> {
    vec![
        "departureDate".to_string(),
        "checkOut".to_string(),
        "end".to_string(),
    ]
}

fn default_display_fields() -> Vec<String> {
    vec![
        "guestName".to_string(),
        "name".to_string(),
        "title".to_string(),
    ]
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            id_fields: default_id_fields(),
            room_fields: default_room_fields(),
            start_fields: default_start_fields(),
            end_fields: default_end_fields(),
            display_fields: default_display_fields(),
            missing_end: MissingEndPolicy::default(),
        }
    }
}

impl FieldMap {
    /// Profile for front-desk style feeds where single-date point records
    /// are kept as one-night stays instead of being rejected.
    pub fn front_desk() -> Self {
        Self {
            missing_end: MissingEndPolicy::OneNight,
            ..Self::default()
        }
    }

    /// Load a field-map profile from a TOML file.
    ///
    /// Fields absent from the file keep their defaults.
    ///
    /// # Returns
    /// * `Ok(FieldMap)` if successful
    /// * `Err(Error::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to read field map file: {}", e)))?;

        let field_map: FieldMap = toml::from_str(&content)
            .map_err(|e| Error::Configuration(format!("Failed to parse field map file: {}", e)))?;

        Ok(field_map)
    }
}

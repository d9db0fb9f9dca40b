//! Day-granular date handling.
//!
//! Every mapping in the engine is keyed by a canonical `YYYY-MM-DD` string
//! rather than a datetime value, so lookups can never drift with time zones
//! or time-of-day noise. Lexical order on canonical keys matches
//! chronological order, which keeps ordered maps sorted by date for free.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Canonical `YYYY-MM-DD` day key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayKey(pub String);

impl DayKey {
    /// Build the canonical key for a date.
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date.format("%Y-%m-%d").to_string())
    }

    /// Raw key string.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Parse the key back into a date. Returns `None` for non-canonical keys.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey::from_date(date)
    }
}

/// One calendar day inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Day-granular date
    pub date: NaiveDate,
    /// Canonical key for this date
    pub key: DayKey,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            key: DayKey::from_date(date),
        }
    }
}

/// Ordered, gap-free sequence of the days visible in a calendar view.
///
/// Produced by the window builder; consumed unchanged by the aggregators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// Strictly increasing days, de-duplicated by key
    pub days: Vec<Day>,
    /// Key of the first day
    pub start_key: DayKey,
    /// Key of the day after the last day (exclusive bound)
    pub end_key_exclusive: DayKey,
}

impl DateWindow {
    /// Number of days in the window.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Date bounds as `(start, end_exclusive)`, or `None` for an empty shell.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.days.first()?;
        let last = self.days.last()?;
        Some((first.date, last.date.succ_opt()?))
    }

    /// Whether a canonical key falls inside the window.
    pub fn contains_key(&self, key: &DayKey) -> bool {
        self.start_key <= *key && *key < self.end_key_exclusive
    }

    /// Days grouped into calendar rows of seven, matching the month layout.
    pub fn weeks(&self) -> std::slice::Chunks<'_, Day> {
        self.days.chunks(7)
    }
}

/// Iterate every date in the half-open range `[start, end_exclusive)`.
pub fn day_range(start: NaiveDate, end_exclusive: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d < end_exclusive)
}

/// Parse a raw date value at day granularity.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps, and bare datetime forms
/// with or without fractional seconds. Any time-of-day component is stripped;
/// for offset timestamps the date is taken as written, not converted.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    None
}

//! Date window construction.
//!
//! Two window shapes feed the calendar views: a fixed month board of exactly
//! six Monday-aligned weeks, and a free span of 1 to 31 consecutive days.
//! Both come back as the same [`DateWindow`] type, already keyed and ready
//! for the aggregators.

use chrono::{Datelike, Days, NaiveDate};
use log::debug;

use crate::error::{Error, Result};
use crate::models::{Day, DayKey, DateWindow};

/// Days in a month-mode window: six Monday-aligned weeks.
pub const MONTH_WINDOW_DAYS: usize = 42;

/// Upper bound for span-mode windows.
pub const MAX_SPAN_DAYS: u32 = 31;

/// Window shape requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// Six Monday-aligned weeks around the anchor's month
    Month,
    /// Exactly this many consecutive days starting at the anchor
    Span(u32),
}

/// Build a window for the requested mode.
pub fn build_window(mode: WindowMode, anchor: NaiveDate) -> Result<DateWindow> {
    match mode {
        WindowMode::Month => Ok(build_month_window(anchor)),
        WindowMode::Span(span_days) => build_span_window(anchor, span_days),
    }
}

/// Build the fixed month board for the anchor's month.
///
/// The first day of the anchor's month is backed up to the preceding Monday
/// (zero days when the month already starts on one), then exactly 42
/// consecutive days are emitted regardless of month length. Days spilling
/// into the adjacent months are fully valid entries; callers flag them for
/// display instead of omitting them.
pub fn build_month_window(anchor: NaiveDate) -> DateWindow {
    let first_of_month = anchor.with_day(1).unwrap_or(anchor);
    let monday_offset = first_of_month.weekday().num_days_from_monday() as u64;
    let grid_start = first_of_month
        .checked_sub_days(Days::new(monday_offset))
        .unwrap_or(first_of_month);

    let days: Vec<Day> = grid_start
        .iter_days()
        .take(MONTH_WINDOW_DAYS)
        .map(Day::new)
        .collect();

    let window = window_from_days(days);
    debug!(
        "Built month window: anchor={} start={} end={}",
        anchor, window.start_key, window.end_key_exclusive
    );
    window
}

/// Build a free span of consecutive days starting at `start`.
///
/// # Returns
/// * `Ok(DateWindow)` with exactly `span_days` entries
/// * `Err(Error::InvalidSpan)` when `span_days` is outside `1..=31`
pub fn build_span_window(start: NaiveDate, span_days: u32) -> Result<DateWindow> {
    if !(1..=MAX_SPAN_DAYS).contains(&span_days) {
        return Err(Error::InvalidSpan(span_days));
    }

    let days: Vec<Day> = start
        .iter_days()
        .take(span_days as usize)
        .map(Day::new)
        .collect();

    let window = window_from_days(days);
    debug!(
        "Built span window: start={} span_days={} end={}",
        start, span_days, window.end_key_exclusive
    );
    Ok(window)
}

fn window_from_days(days: Vec<Day>) -> DateWindow {
    // Both builders emit at least one day; the fallbacks are unreachable on
    // any representable calendar input.
    let start_key = days
        .first()
        .map(|d| d.key.clone())
        .unwrap_or_else(|| DayKey(String::new()));
    let end_key_exclusive = days
        .last()
        .and_then(|d| d.date.succ_opt())
        .map(DayKey::from_date)
        .unwrap_or_else(|| start_key.clone());

    DateWindow {
        days,
        start_key,
        end_key_exclusive,
    }
}

//! # PMS Calendar Engine
//!
//! Calendar and occupancy-grid computation for a hotel property-management
//! dashboard.
//!
//! This crate turns a list of date-ranged booking records into the two
//! shapes the calendar views render: a month- or span-shaped grid of days
//! carrying arrival, stay and departure counts, and a room-by-day occupancy
//! matrix. Fetching the raw records and rendering the result belong to the
//! surrounding dashboard; the engine is a pure, synchronous library.
//!
//! ## Features
//!
//! - **Window construction**: fixed six-week month boards and free 1–31 day
//!   spans, keyed by canonical `YYYY-MM-DD` day strings
//! - **Record normalization**: configurable field-name candidates, day-granular
//!   date truncation, drop-and-count handling of malformed records
//! - **Day aggregation**: per-day arrival/stay/departure counts with
//!   de-duplicated, display-ordered item lists
//! - **Room grid**: a complete room-by-day matrix with explicit empty cells
//! - **Window summary**: whole-window KPI totals for the header cards
//! - **Fingerprints**: SHA-256 memo keys over events and windows
//!
//! ## Architecture
//!
//! - [`api`]: the public call contract in one place
//! - [`models`]: day keys, windows, canonical events, payload ingestion
//! - [`config`]: the normalization field map and its TOML profiles
//! - [`services`]: the pure computation passes
//!
//! ## Semantics
//!
//! Every stay is a half-open day interval `[start, end)`: the departure day
//! consumes no stay-night, so a same-day checkout and check-in on one room
//! is a valid turnover, not a conflict. All date comparisons happen at day
//! granularity on canonical keys, never on timestamps.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};

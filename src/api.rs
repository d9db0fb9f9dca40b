//! Public API surface for the calendar engine.
//!
//! This file consolidates the call contract in one place: the entry points
//! the dashboard invokes and every type they exchange. All types derive
//! Serialize/Deserialize for JSON transport to the rendering layer.

pub use crate::config::FieldMap;
pub use crate::config::MissingEndPolicy;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::models::extract_records;
pub use crate::models::parse_records_str;
pub use crate::models::DateWindow;
pub use crate::models::Day;
pub use crate::models::DayKey;
pub use crate::models::Event;
pub use crate::models::EventId;
pub use crate::models::RoomKey;
pub use crate::services::aggregate_day_buckets;
pub use crate::services::assemble_room_grid;
pub use crate::services::build_month_window;
pub use crate::services::build_span_window;
pub use crate::services::build_window;
pub use crate::services::events_fingerprint;
pub use crate::services::normalize_events;
pub use crate::services::summarize_window;
pub use crate::services::window_fingerprint;
pub use crate::services::DayBucket;
pub use crate::services::DayBucketMap;
pub use crate::services::NormalizeOutcome;
pub use crate::services::RejectionSummary;
pub use crate::services::RoomGrid;
pub use crate::services::WindowMode;
pub use crate::services::WindowSummary;

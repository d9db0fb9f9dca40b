//! Calendar engine services.
//!
//! Pure functions over `(events, window, known_rooms)`: window construction,
//! record normalization, per-day aggregation, the room occupancy matrix,
//! window KPI totals, and the memoization fingerprints. No service holds
//! state or performs I/O.

pub mod day_buckets;
pub mod fingerprint;
pub mod normalize;
pub mod ordering;
pub mod room_grid;
pub mod summary;
pub mod window;

pub use day_buckets::{aggregate_day_buckets, DayBucket, DayBucketMap};
pub use fingerprint::{events_fingerprint, window_fingerprint};
pub use normalize::{normalize_events, NormalizeOutcome, RejectionSummary};
pub use ordering::{display_order, sort_for_display};
pub use room_grid::{assemble_room_grid, RoomGrid};
pub use summary::{summarize_window, WindowSummary};
pub use window::{
    build_month_window, build_span_window, build_window, WindowMode, MAX_SPAN_DAYS,
    MONTH_WINDOW_DAYS,
};

//! Input fingerprints for caller-side memoization.
//!
//! Aggregation is pure, so a caller can cache outputs keyed by
//! `(events_fingerprint, window_fingerprint)` and skip recomputation when
//! navigation returns to an already-seen view. Fingerprints are SHA-256
//! digests over a canonical serialization, hex-encoded.

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::models::{DateWindow, Event};

/// Fingerprint of an event list.
///
/// The digest covers every canonical field including the opaque attributes,
/// in input order, so reordering or editing any record changes the key.
pub fn events_fingerprint(events: &[Event]) -> Result<String> {
    let mut hasher = Sha256::new();
    for event in events {
        hasher.update(serde_json::to_vec(event)?);
        hasher.update([0u8]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Fingerprint of a window.
///
/// Covers every day key plus the exclusive end bound, so two windows hash
/// alike exactly when they show the same days.
pub fn window_fingerprint(window: &DateWindow) -> String {
    let mut hasher = Sha256::new();
    for day in &window.days {
        hasher.update(day.key.value().as_bytes());
        hasher.update([0u8]);
    }
    hasher.update(window.end_key_exclusive.value().as_bytes());
    hex::encode(hasher.finalize())
}

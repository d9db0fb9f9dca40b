//! Error types for the calendar engine.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the engine.
///
/// Only caller contract violations appear here. Malformed event records are
/// dropped and counted by the normalizer instead of surfacing as errors, so a
/// dashboard can still render the days and rooms that are valid.
#[derive(Error, Debug)]
pub enum Error {
    /// Span-mode window length outside the supported range
    #[error("Invalid span length {0}: expected between 1 and 31 days")]
    InvalidSpan(u32),

    /// Raw payload could not yield a record array
    #[error("Payload error: {0}")]
    Payload(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

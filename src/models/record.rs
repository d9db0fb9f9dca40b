// ============================================================================
// Raw payload ingestion
// ============================================================================
//
// The REST source wraps record arrays in inconsistent response envelopes
// depending on the endpoint. These helpers locate the record array in any of
// the observed shapes before normalization:
// `{"data": {"items": [...]}}`, `{"items": [...]}`, `{"data": [...]}`, or a
// bare array. A payload with no record array anywhere is a hard
// `Error::Payload`; bad entries inside the array are handled (dropped and
// counted) downstream.

use anyhow::Context;
use serde_json::Value;

use crate::error::{Error, Result};

/// Parse a raw payload string and extract its record array.
///
/// # Returns
/// * `Ok(Vec<Value>)` with the located record array
/// * `Err(Error::Payload)` for invalid JSON or a payload without one
pub fn parse_records_str(json: &str) -> Result<Vec<Value>> {
    let payload: Value = serde_json::from_str(json)
        .context("Invalid event payload JSON")
        .map_err(|e| Error::Payload(format!("{:#}", e)))?;
    extract_records(&payload)
}

/// Extract the record array from an already-parsed payload.
///
/// Tries `data.items`, then `items`, then `data`, then the payload itself,
/// taking the first value that is an array.
pub fn extract_records(payload: &Value) -> Result<Vec<Value>> {
    match find_record_array(payload) {
        Some(records) => Ok(records.clone()),
        None => Err(Error::Payload(
            "Payload carries no record array".to_string(),
        )),
    }
}

fn find_record_array(payload: &Value) -> Option<&Vec<Value>> {
    let candidates = [
        payload.pointer("/data/items"),
        payload.get("items"),
        payload.get("data"),
        Some(payload),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|candidate| candidate.as_array())
}

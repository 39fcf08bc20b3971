//! Cart codec: the full record sequence as one JSON array with ISO
//! millisecond timestamps.

use pocket_core::InsightRecord;

use crate::error::StorageError;

/// Encode records in store order.
///
/// # Errors
///
/// Returns [`StorageError::Codec`] if serialization fails.
pub fn encode(records: &[InsightRecord]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(records)?)
}

/// Decode a persisted array. Any record that does not match the schema
/// rejects the whole value.
///
/// # Errors
///
/// Returns [`StorageError::Codec`] for non-JSON or schema-invalid content.
pub fn decode(raw: &str) -> Result<Vec<InsightRecord>, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

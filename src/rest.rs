//! Supabase-style request conventions shared by the job and offer resources:
//! inserts accept a single object or an array of objects, and PATCH carries
//! the target id in the payload.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Decodes an insert body into typed inputs. A bare object is treated as a
/// one-element batch. Any element failing schema validation fails the whole
/// request before anything is stored.
pub fn decode_batch<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    let items = match body {
        Value::Array(items) => items,
        other => vec![other],
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| ApiError::Validation(e.to_string())))
        .collect()
}

/// Removes the `id` field from a PATCH payload. An absent or non-string id is
/// a validation failure; there is no fallback target.
pub fn take_id(body: &mut Value) -> Result<String, ApiError> {
    match body.as_object_mut().and_then(|map| map.remove("id")) {
        Some(Value::String(id)) => Ok(id),
        Some(_) => Err(ApiError::validation("id must be a string")),
        None => Err(ApiError::validation("id is required")),
    }
}

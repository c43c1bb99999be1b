//! Success body handling

use crate::utils::error::{ClientError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Parse a 2xx body
///
/// Empty bodies, `null` and unparseable text all mean "success without
/// payload"; they never fail.
pub fn parse_success_body(raw: &str) -> Option<Value> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Ignoring non-JSON success body: {}", e);
            None
        }
    }
}

/// Strip a `{ "payload": .. }` envelope if present
pub fn unwrap_payload(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("payload") {
            Some(payload) => payload,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// The `payload` field of an envelope, if the value is one
pub fn envelope_payload(value: &Value) -> Option<&Value> {
    value.get("payload").filter(|payload| !payload.is_null())
}

/// Decode a bare or enveloped payload
pub fn decode_payload<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(unwrap_payload(value))
        .map_err(|e| ClientError::unexpected_response(format!("Malformed payload: {}", e)))
}

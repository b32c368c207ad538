//! Turns failed API responses into one guest-facing message.
//!
//! The RSVP API answers failures with a JSON `{"error": "..."}` object, plain
//! text, or nothing at all. Fetch and submit failures go through the same
//! rules so the guest always sees a single string.

use serde_json::Value;
use shared::text::is_blank;

use super::rsvp_api::ApiFailure;

/// Normalizes an error response body.
///
/// - JSON object with a non-empty `error` string: that string
/// - any other JSON object or array: the pretty-printed JSON
/// - JSON `null`, `false`, `0` or `""`: `generic`
/// - other JSON scalars: their JSON text
/// - non-JSON text: the raw body
/// - empty or whitespace-only body: `generic`
pub fn normalize_error_body(body: &str, generic: &str) -> String {
    if is_blank(body) {
        return generic.to_string();
    }

    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => return body.to_string(),
    };

    match value {
        Value::Object(ref map) => match map.get("error") {
            Some(Value::String(message)) if !message.is_empty() => message.clone(),
            _ => pretty(&value, generic),
        },
        Value::Array(_) => pretty(&value, generic),
        Value::String(text) if !text.is_empty() => text,
        Value::Number(ref n) if n.as_f64() != Some(0.0) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => generic.to_string(),
    }
}

/// Normalizes any API failure.
///
/// Only HTTP status failures carry a body; transport errors, timeouts and
/// undecodable success bodies all map to `generic`.
pub fn normalize_failure(failure: &ApiFailure, generic: &str) -> String {
    match failure {
        ApiFailure::Status { body, .. } => normalize_error_body(body, generic),
        ApiFailure::Transport(_) | ApiFailure::Timeout | ApiFailure::Decode(_) => {
            generic.to_string()
        }
    }
}

fn pretty(value: &Value, generic: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| generic.to_string())
}

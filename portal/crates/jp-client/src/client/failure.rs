use crate::ClientError;

use serde_json::Value;

/// Turn a non-2xx response into a typed error.
///
/// The backend reports failures as `{"detail": ...}` where `detail` is either a
/// human-readable string or a list of field errors shaped like `{"msg": ...}`.
/// Anything else falls back to `fallback`.
#[track_caller]
pub fn classify_failure(status: u16, body: &[u8], fallback: &str) -> ClientError {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());

    if let Some(Value::Array(items)) = &detail {
        let messages = field_messages(items);
        if !messages.is_empty() {
            return if status == 401 {
                ClientError::unauthorized(messages.join(", "))
            } else {
                ClientError::validation(status, messages)
            };
        }
    }

    let message = match detail {
        Some(Value::String(text)) if !text.trim().is_empty() => text,
        _ => fallback.to_string(),
    };

    if status == 401 {
        ClientError::unauthorized(message)
    } else {
        ClientError::api(status, message)
    }
}

fn field_messages(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text.clone()),
            other => other.get("msg").and_then(Value::as_str).map(String::from),
        })
        .collect()
}

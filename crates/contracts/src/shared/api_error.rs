use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend on a failed call.
///
/// Handlers answer either `{"error": "..."}` or the framework default
/// `{"detail": ...}`, where `detail` is a string for `HTTPException` and an
/// array of `{loc, msg, type}` objects for request validation failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// Human-readable message, `error` first then `detail`
    pub fn message(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return Some(error.to_string());
        }
        self.detail.as_ref().and_then(detail_message)
    }

    /// Parses a raw response body; anything that is not a JSON object yields `None`
    pub fn parse_message(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message())
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

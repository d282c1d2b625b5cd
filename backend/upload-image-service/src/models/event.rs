use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized invocation event as delivered by API Gateway / function URLs.
///
/// `body` may arrive as JSON text, arbitrary text (base64 image data), or an
/// already-structured object when the function is invoked directly. Query
/// parameters and the base64 flag are kept loosely typed so hand-written test
/// events (numeric ids, `"true"` flags) still reach the handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadEvent {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub query_string_parameters: Option<Value>,
    #[serde(default)]
    pub is_base64_encoded: Option<Value>,
}

impl UploadEvent {
    /// Any truthy flag value counts, including non-empty strings
    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded.as_ref().map_or(false, is_truthy)
    }

    /// Non-blank query parameter rendered as text; non-object parameter
    /// containers are treated as empty
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query_string_parameters
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|params| params.get(name))
            .and_then(field_text)
    }
}

/// Who uploaded the image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderIdentity {
    pub user_id: String,
    pub device_id: String,
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` are falsy; everything else is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Identifier text of a truthy string or number
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(_) if is_truthy(value) => Some(value.to_string()),
        _ => None,
    }
}

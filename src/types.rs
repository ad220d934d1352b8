//! Common types used throughout the WeValu node

use serde_json::{Map, Value};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = Value;

/// JSON object type
pub type JsonObject = Map<String, JsonValue>;

/// Ordered list of query parameters
pub type QueryParams = Vec<(String, String)>;

/// Turn any JSON value into an object.
///
/// Objects pass through; everything else is wrapped as `{"value": ...}` so that
/// every emitted record is addressable by field name.
pub fn into_object(value: JsonValue) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_object_passes_objects_through() {
        let obj = into_object(json!({"id": "1"}));
        assert_eq!(obj.get("id"), Some(&json!("1")));
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_into_object_wraps_scalars() {
        let obj = into_object(json!(42));
        assert_eq!(obj.get("value"), Some(&json!(42)));
    }
}

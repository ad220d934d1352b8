//! Response shape detection

use super::{DATA_FIELD, EVALUATIONS_FIELD};
use crate::types::{into_object, JsonObject, JsonValue};
use serde_json::Value;
use tracing::warn;

/// The shape of an (already unwrapped) response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// A bare list of records
    List(Vec<JsonValue>),
    /// An object whose `evaluations` field is a list of records
    Enveloped(Vec<JsonValue>),
    /// Any other object; treated as one record
    Single(JsonObject),
    /// Scalars and null; yields nothing
    Empty,
}

impl ResponseShape {
    /// Classify a response body
    pub fn classify(value: JsonValue) -> Self {
        match value {
            Value::Array(items) => Self::List(items),
            Value::Object(mut map) => {
                if matches!(map.get(EVALUATIONS_FIELD), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = map.remove(EVALUATIONS_FIELD) {
                        return Self::Enveloped(items);
                    }
                }
                Self::Single(map)
            }
            _ => Self::Empty,
        }
    }

    /// Flatten into output records
    pub fn into_records(self) -> Vec<JsonObject> {
        match self {
            Self::List(items) | Self::Enveloped(items) => {
                items.into_iter().map(into_object).collect()
            }
            Self::Single(map) => vec![map],
            Self::Empty => Vec::new(),
        }
    }

    /// Records of a listing page. A lone object is not a page of records.
    pub fn into_page(self) -> Vec<JsonValue> {
        match self {
            Self::List(items) | Self::Enveloped(items) => items,
            Self::Single(_) | Self::Empty => Vec::new(),
        }
    }

    /// Short name of the shape, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Enveloped(_) => "enveloped",
            Self::Single(_) => "single",
            Self::Empty => "empty",
        }
    }
}

/// Strip one level of `data` nesting, when present and non-empty
pub fn unwrap_envelope(value: JsonValue) -> JsonValue {
    match value {
        Value::Object(mut map) => {
            if map.get(DATA_FIELD).is_some_and(is_present) {
                map.remove(DATA_FIELD).unwrap_or_default()
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}

/// Flatten an unwrapped response into output records
pub fn normalize(value: JsonValue) -> Vec<JsonObject> {
    ResponseShape::classify(value).into_records()
}

/// Extract the records of one raw listing page (envelope included)
pub fn page_records(body: JsonValue) -> Vec<JsonValue> {
    let shape = ResponseShape::classify(unwrap_envelope(body));
    if matches!(shape, ResponseShape::Single(_) | ResponseShape::Empty) {
        warn!(shape = shape.kind(), "Listing page contained no record list");
    }
    shape.into_page()
}

/// Null, `false`, zero and empty strings count as an absent envelope
fn is_present(value: &JsonValue) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

//! Read and build helpers over the `serde_json` value tree.

use crate::error::{GeoJsonError, Result};
use serde_json::{Map, Value};

pub(crate) const TYPE: &str = "type";
pub(crate) const BBOX: &str = "bbox";

/// Name of the JSON kind of `value`, for diagnostics.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn as_array<'a>(value: &'a Value, context: &'static str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or(GeoJsonError::UnexpectedJson {
            expected: "array",
            found: kind(value),
            context,
        })
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    context: &'static str,
) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or(GeoJsonError::UnexpectedJson {
        expected: "object",
        found: kind(value),
        context,
    })
}

pub(crate) fn as_f64(value: &Value, context: &'static str) -> Result<f64> {
    value.as_f64().ok_or(GeoJsonError::UnexpectedJson {
        expected: "number",
        found: kind(value),
        context,
    })
}

/// Member `key` of `object`, treating an explicit `null` like absence.
pub(crate) fn member<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

pub(crate) fn required<'a>(object: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value> {
    member(object, key).ok_or(GeoJsonError::MissingMember(key))
}

/// The `type` discriminator, if present and a string.
pub(crate) fn discriminator(object: &Map<String, Value>) -> Option<&str> {
    object.get(TYPE).and_then(Value::as_str)
}

/// Object pre-seeded with its `type` member so it always serializes first.
pub(crate) fn typed_object(type_name: &str) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert(TYPE.to_string(), Value::String(type_name.to_string()));
    object
}

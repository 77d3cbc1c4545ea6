//! Conversion of typed filter/input objects into GraphQL-variable-safe
//! values.
//!
//! The serde layer handles the per-type conversions (enums carry explicit
//! wire renames, chrono timestamps serialize to RFC 3339); the functions
//! here handle the structural rules: mechanical lower_snake_case to
//! lowerCamelCase field-name conversion and sparse-field omission.

use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

type Result<T> = std::result::Result<T, VariableSerializeError>;

/// Convert a lower_snake_case identifier to the wire format's
/// lowerCamelCase.
///
/// Purely mechanical: split on `_`, capitalize every segment but the first,
/// concatenate. Already-camel input passes through unchanged.
pub fn snake_to_camel(name: &str) -> String {
    let mut segments = name.split('_');
    let mut result = String::with_capacity(name.len());
    if let Some(first) = segments.next() {
        result.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Recursively rewrite a JSON value into GraphQL-variable form.
///
/// Objects get lowerCamelCase keys, and entries whose value is null are
/// omitted entirely — unset optional fields disappear rather than becoming
/// explicit nulls (sparse update/filter semantics; omission is not null).
/// Arrays convert element-wise and keep their nulls. Scalars pass through
/// unchanged.
pub fn serialize_value(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(entries) => JsonValue::Object(
            entries
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (snake_to_camel(&key), serialize_value(value)))
                .collect(),
        ),
        JsonValue::Array(elements) => JsonValue::Array(
            elements.into_iter().map(serialize_value).collect(),
        ),
        scalar => scalar,
    }
}

/// Serialize a typed filter/input object into a GraphQL-variable-safe
/// value: `serde_json::to_value` followed by [`serialize_value`].
///
/// Values JSON cannot represent (maps with non-string keys, non-finite
/// floats) surface as an error rather than a lossy fallback.
pub fn to_variable<V>(value: &V) -> Result<JsonValue>
where
    V: Serialize + ?Sized,
{
    Ok(serialize_value(serde_json::to_value(value)?))
}

/// Failure to convert a value into JSON form.
#[derive(Debug, Error)]
#[error("Value is not representable as a GraphQL variable: {0}")]
pub struct VariableSerializeError(#[from] serde_json::Error);

//! Field-access helpers for hydrating decoded JSON payloads.
//!
//! Pure lookups over [`serde_json::Value`]; no I/O. The entity types in
//! [`crate::types`] build their `from_value` constructors on these.

use serde_json::Value;

use crate::error::HydrationError;

/// Required top-level string field.
pub(crate) fn str_field<'a>(
    data: &'a Value,
    field: &'static str,
) -> Result<&'a str, HydrationError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(HydrationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(HydrationError::InvalidField(field)),
    }
}

/// Required top-level id field.
pub(crate) fn id_field(data: &Value, field: &'static str) -> Result<u64, HydrationError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(HydrationError::MissingField(field)),
        Some(value) => parse_id(value).ok_or(HydrationError::InvalidField(field)),
    }
}

/// Interpret a value as a numeric id.
///
/// The API serializes ids inconsistently (JSON numbers in some payloads,
/// numeric strings in others), so both are accepted.
pub(crate) fn parse_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Walk a nested object path, `None` as soon as a step is absent.
pub(crate) fn lookup<'a>(data: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(data, |value, key| value.get(key))
}

/// Optional string at a nested path.
pub(crate) fn opt_str(data: &Value, path: &[&str]) -> Option<String> {
    lookup(data, path)?.as_str().map(ToOwned::to_owned)
}

/// Optional unsigned integer at a nested path.
pub(crate) fn opt_u64(data: &Value, path: &[&str]) -> Option<u64> {
    lookup(data, path)?.as_u64()
}

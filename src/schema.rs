//! Declared required-field schemas and the shared presence check.
//!
//! Each payload type declares its required wire fields as a static slice
//! rather than discovering them by reflection. Presence means key-existence
//! in the raw object: a field set to `null` is present, and unknown extra
//! keys are ignored so permissive superset JSON is accepted.

use crate::error::{FieldIssue, ValidationError};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Collect a `field -> "missing parameter"` entry for every required field
/// not present as a key in `raw`. Aggregated in one pass, never fail-fast.
pub fn missing_fields(
    required: &'static [&'static str],
    raw: &Map<String, Value>,
) -> BTreeMap<String, FieldIssue> {
    required
        .iter()
        .filter(|field| !raw.contains_key(**field))
        .map(|field| ((*field).to_string(), FieldIssue::missing()))
        .collect()
}

/// Presence-check `required` against `raw`, failing with the aggregated
/// report if any field is absent.
pub fn check_required(
    required: &'static [&'static str],
    raw: &Map<String, Value>,
) -> crate::Result<()> {
    let missing = missing_fields(required, raw);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(missing))
    }
}

/// Extract a present field as a string.
pub fn extract_str(raw: &Map<String, Value>, field: &str) -> crate::Result<String> {
    match raw.get(field).and_then(Value::as_str) {
        Some(text) => Ok(text.to_string()),
        None => Err(ValidationError::single(field, FieldIssue::expected("string"))),
    }
}

/// Extract a present field as an unsigned integer token budget. No range is
/// enforced beyond what integer extraction itself implies.
pub fn extract_u64(raw: &Map<String, Value>, field: &str) -> crate::Result<u64> {
    match raw.get(field).and_then(Value::as_u64) {
        Some(count) => Ok(count),
        None => Err(ValidationError::single(field, FieldIssue::expected("integer"))),
    }
}

/// Extract a present field as a boolean.
pub fn extract_bool(raw: &Map<String, Value>, field: &str) -> crate::Result<bool> {
    match raw.get(field).and_then(Value::as_bool) {
        Some(flag) => Ok(flag),
        None => Err(ValidationError::single(field, FieldIssue::expected("boolean"))),
    }
}

/// Extract a present field as a JSON object, for nested validation.
pub fn extract_object<'a>(
    raw: &'a Map<String, Value>,
    field: &str,
) -> crate::Result<&'a Map<String, Value>> {
    match raw.get(field).and_then(Value::as_object) {
        Some(object) => Ok(object),
        None => Err(ValidationError::single(field, FieldIssue::expected("object"))),
    }
}

/// Extract a present field as a JSON array.
pub fn extract_array<'a>(
    raw: &'a Map<String, Value>,
    field: &str,
) -> crate::Result<&'a Vec<Value>> {
    match raw.get(field).and_then(Value::as_array) {
        Some(array) => Ok(array),
        None => Err(ValidationError::single(field, FieldIssue::expected("array"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn reports_every_missing_field_at_once() {
        let missing = missing_fields(&["model", "messages", "stream"], &raw(json!({})));
        let names: Vec<&str> = missing.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["messages", "model", "stream"]);
    }

    #[test]
    fn null_counts_as_present() {
        let missing = missing_fields(&["inputs"], &raw(json!({ "inputs": null })));
        assert!(missing.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let object = raw(json!({ "inputs": "hi", "debug": true, "trace_id": "abc" }));
        assert!(check_required(&["inputs"], &object).is_ok());
    }

    #[test]
    fn wrong_type_yields_expected_diagnostic() {
        let object = raw(json!({ "maxTokens": "not a number" }));
        let err = extract_u64(&object, "maxTokens").unwrap_err();
        assert_eq!(
            err,
            ValidationError::single("maxTokens", FieldIssue::message("expected integer"))
        );
    }
}

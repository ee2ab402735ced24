//! Aggregated, field-keyed validation errors.
//!
//! Validation reports every violated requirement at a level in one error
//! instead of stopping at the first. The mapping is recursive: a nested
//! object's failure appears as a sub-mapping under its parent field key,
//! never flattened into the parent level.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Diagnostic attached to every required field absent from the raw input.
pub(crate) const MISSING_PARAMETER: &str = "missing parameter";

/// One entry in a validation report: either a terminal diagnostic for the
/// field itself, or the report of a nested object that failed to validate.
///
/// Depth is bounded by the nesting depth of the payload types, which is at
/// most two levels in this domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldIssue {
    /// Terminal diagnostic, e.g. `"missing parameter"`.
    Message(String),
    /// A nested object failed; its own field-keyed report is carried whole.
    Nested(BTreeMap<String, FieldIssue>),
}

impl FieldIssue {
    pub fn message(text: impl Into<String>) -> Self {
        FieldIssue::Message(text.into())
    }

    pub(crate) fn missing() -> Self {
        FieldIssue::Message(MISSING_PARAMETER.to_string())
    }

    pub(crate) fn expected(kind: &str) -> Self {
        FieldIssue::Message(format!("expected {kind}"))
    }
}

impl From<ValidationError> for FieldIssue {
    fn from(err: ValidationError) -> Self {
        FieldIssue::Nested(err.fields)
    }
}

/// Structured report of every requirement a raw input violated.
///
/// Construction of a payload either fully succeeds or fails with one of
/// these; no partial value is ever returned. Callers are expected to log the
/// report and skip the offending request without crashing the run.
///
/// `BTreeMap` keeps the rendered field order deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("invalid payload: {}", render_fields(.fields))]
pub struct ValidationError {
    pub fields: BTreeMap<String, FieldIssue>,
}

impl ValidationError {
    pub fn new(fields: BTreeMap<String, FieldIssue>) -> Self {
        Self { fields }
    }

    /// Single-field report, the common case for nested records.
    pub fn single(field: impl Into<String>, issue: FieldIssue) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.into(), issue);
        Self { fields }
    }

    /// Field names reported at the top level of this error.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

fn render_fields(fields: &BTreeMap<String, FieldIssue>) -> String {
    let parts: Vec<String> = fields
        .iter()
        .map(|(name, issue)| match issue {
            FieldIssue::Message(text) => format!("{name}: {text}"),
            FieldIssue::Nested(inner) => format!("{name}: {{{}}}", render_fields(inner)),
        })
        .collect();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_every_failing_field() {
        let mut fields = BTreeMap::new();
        fields.insert("inputs".to_string(), FieldIssue::missing());
        fields.insert(
            "parameters".to_string(),
            FieldIssue::from(ValidationError::single(
                "maxNewTokens",
                FieldIssue::missing(),
            )),
        );
        let err = ValidationError::new(fields);
        let rendered = err.to_string();
        assert!(rendered.contains("inputs: missing parameter"));
        assert!(rendered.contains("parameters: {maxNewTokens: missing parameter}"));
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let err = ValidationError::single("parameters", FieldIssue::missing());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fields": { "parameters": "missing parameter" } })
        );
    }
}

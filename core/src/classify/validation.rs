//! Extraction of per-field validation messages from backend bodies.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Mapping from field name to a single error message. Keys are unique; see
/// [`extract_field_errors`] for the per-shape policy on duplicates.
pub type FieldErrors = BTreeMap<String, String>;

/// Pull per-field validation messages out of a response body.
///
/// Recognized shapes, tried in order, first successful (non-empty) match
/// wins:
/// 1. `{errors: {field: [messages...]}}` — only the first message per field
///    is retained; backends in this dialect sort messages by severity.
/// 2. `{errors: [{field, message}...]}` or a bare array of the same —
///    entries missing either key are skipped, and a duplicate field
///    overwrites the earlier one. Last-wins is this dialect's own rule and
///    deliberately differs from shape 1; unifying the two would change
///    observed behavior against one backend family.
/// 3. `{field, message}` — a single-entry map.
///
/// Anything else returns `None` and the caller falls back to a plain
/// message. Never fails.
#[must_use]
pub fn extract_field_errors(body: &Value) -> Option<FieldErrors> {
    let errors = body.get("errors");

    if let Some(map) = errors.and_then(Value::as_object) {
        let extracted = from_message_lists(map);
        if !extracted.is_empty() {
            return Some(extracted);
        }
    }

    let entry_array = errors
        .and_then(Value::as_array)
        .or_else(|| body.as_array());
    if let Some(entries) = entry_array {
        let extracted = from_entry_array(entries);
        if !extracted.is_empty() {
            return Some(extracted);
        }
    }

    if let Some((field, message)) = as_field_entry(body) {
        return Some(FieldErrors::from([(field, message)]));
    }

    None
}

/// Shape 1: map from field to an array of messages; first message wins.
fn from_message_lists(map: &Map<String, Value>) -> FieldErrors {
    map.iter()
        .filter_map(|(field, messages)| {
            let first = messages.as_array()?.iter().find_map(Value::as_str)?;
            Some((field.clone(), first.to_owned()))
        })
        .collect()
}

/// Shape 2: array of `{field, message}` entries; last duplicate wins.
fn from_entry_array(entries: &[Value]) -> FieldErrors {
    let mut extracted = FieldErrors::new();
    for entry in entries {
        if let Some((field, message)) = as_field_entry(entry) {
            extracted.insert(field, message);
        }
    }
    extracted
}

fn as_field_entry(value: &Value) -> Option<(String, String)> {
    let field = value.get("field").and_then(Value::as_str)?;
    let message = value.get("message").and_then(Value::as_str)?;
    Some((field.to_owned(), message.to_owned()))
}

#[cfg(test)]
mod tests;

//! Tests for the recognized validation-error shapes and their precedence.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn message_list_shape_keeps_the_first_message_per_field() {
    let extracted = extract_field_errors(&json!({
        "errors": {"dpi": ["too short", "invalid"]}
    }));
    assert_eq!(
        extracted,
        Some(FieldErrors::from([("dpi".to_owned(), "too short".to_owned())]))
    );
}

#[rstest]
fn message_list_shape_skips_unusable_fields() {
    let extracted = extract_field_errors(&json!({
        "errors": {"dpi": ["too short"], "name": "not-a-list", "salary": []}
    }));
    assert_eq!(
        extracted,
        Some(FieldErrors::from([("dpi".to_owned(), "too short".to_owned())]))
    );
}

#[rstest]
fn entry_array_shape_builds_the_map_last_wins() {
    let extracted = extract_field_errors(&json!({
        "errors": [
            {"field": "dpi", "message": "too short"},
            {"field": "name", "message": "required"},
            {"field": "dpi", "message": "invalid"},
        ]
    }));
    assert_eq!(
        extracted,
        Some(FieldErrors::from([
            ("dpi".to_owned(), "invalid".to_owned()),
            ("name".to_owned(), "required".to_owned()),
        ]))
    );
}

#[rstest]
fn entry_array_shape_skips_incomplete_entries() {
    let extracted = extract_field_errors(&json!([
        {"field": "dpi"},
        {"message": "orphan"},
        {"field": "name", "message": "required"},
    ]));
    assert_eq!(
        extracted,
        Some(FieldErrors::from([("name".to_owned(), "required".to_owned())]))
    );
}

#[rstest]
fn single_entry_shape_yields_a_single_entry_map() {
    let extracted = extract_field_errors(&json!({"field": "salary", "message": "negative"}));
    assert_eq!(
        extracted,
        Some(FieldErrors::from([("salary".to_owned(), "negative".to_owned())]))
    );
}

#[rstest]
fn map_shape_is_tried_before_the_entry_array() {
    // When `errors` is an object the map dialect wins even if the body also
    // looks like a single entry.
    let extracted = extract_field_errors(&json!({
        "errors": {"dpi": ["too short"]},
        "field": "name",
        "message": "required",
    }));
    assert_eq!(
        extracted,
        Some(FieldErrors::from([("dpi".to_owned(), "too short".to_owned())]))
    );
}

#[rstest]
fn empty_matches_fall_through_to_the_next_shape() {
    // An `errors` object with no usable entries must not mask a usable
    // single-entry body.
    let extracted = extract_field_errors(&json!({
        "errors": {},
        "field": "name",
        "message": "required",
    }));
    assert_eq!(
        extracted,
        Some(FieldErrors::from([("name".to_owned(), "required".to_owned())]))
    );
}

#[rstest]
#[case::empty_object(json!({}))]
#[case::plain_message(json!({"message": "nope"}))]
#[case::scalar(json!(5))]
#[case::null(json!(null))]
#[case::empty_array(json!([]))]
fn unrecognized_bodies_yield_none(#[case] body: serde_json::Value) {
    assert_eq!(extract_field_errors(&body), None);
}

//! Tests for list normalization over heterogeneous envelopes.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn employees_map_each_item_through_the_field_normalizer() {
    let page = employees(&json!({
        "Data": [
            {"IdEmployee": 1, "Nombre": "Ana", "Estado": "Activo"},
            {"id": 2, "name": "Luis", "active": false},
        ],
        "Total": 12,
        "Page": 2,
    }));
    assert_eq!(page.total, 12);
    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items.first().map(|row| row.id), Some(1));
    assert_eq!(page.items.first().map(|row| row.active), Some(true));
    assert_eq!(page.items.last().map(|row| row.name.clone()), Some("Luis".to_owned()));
}

#[rstest]
fn missing_total_reports_the_page_length() {
    let page = employees(&json!({"items": [{"id": 1}, {"id": 2}, {"id": 3}]}));
    assert_eq!(page.total, 3);
    assert_eq!(page.page_size, 3);
}

#[rstest]
#[case::scalar(json!(7))]
#[case::null(json!(null))]
#[case::no_known_alias(json!({"rows": [1]}))]
fn unrecognized_envelopes_normalize_to_an_empty_page(#[case] raw: serde_json::Value) {
    let page = employees(&raw);
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.page, 1);
}

#[rstest]
fn malformed_items_degrade_to_default_rows_rather_than_failing() {
    let page = employees(&json!({"items": [42, "junk", {"id": 9}]}));
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items.first().map(|row| row.id), Some(0));
    assert_eq!(page.items.last().map(|row| row.id), Some(9));
}

#[rstest]
fn departments_and_positions_share_the_pipeline() {
    let departments_page = departments(&json!({"registros": [{"Nombre": "Planilla"}]}));
    assert_eq!(
        departments_page.items.first().map(|d| d.name.clone()),
        Some("Planilla".to_owned())
    );

    let positions_page = positions(&json!([{"title": "Clerk", "baseSalary": 3100}]));
    assert_eq!(
        positions_page.items.first().and_then(|p| p.base_salary),
        Some(3100.0)
    );
}

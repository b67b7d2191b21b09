//! Tests for field normalization: alias precedence, coercion, totality.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn canonical_keys_normalize_directly() {
    let record = employee(&json!({
        "id": 7,
        "name": "Ana Morales",
        "dpi": "2547 89001 0101",
        "department": "Payroll",
        "position": "Analyst",
        "active": true,
        "salary": 6500.0,
        "hiredOn": "2021-03-15",
    }));
    assert_eq!(record.id, 7);
    assert_eq!(record.name, "Ana Morales");
    assert_eq!(record.department.as_deref(), Some("Payroll"));
    assert!(record.active);
    assert_eq!(record.salary, Some(6500.0));
    assert_eq!(record.hired_on.as_deref(), Some("2021-03-15"));
}

#[rstest]
fn legacy_casing_normalizes_to_the_same_record() {
    let record = employee(&json!({
        "IdEmployee": 7,
        "Nombre": "Ana Morales",
        "Departamento": "Planilla",
        "Estado": "Activo",
        "Salario": "6500",
    }));
    assert_eq!(record.id, 7);
    assert_eq!(record.name, "Ana Morales");
    assert_eq!(record.department.as_deref(), Some("Planilla"));
    assert!(record.active);
    assert_eq!(record.salary, Some(6500.0));
}

#[rstest]
fn alias_precedence_prefers_the_first_listed_key() {
    // `id` is listed before `Id`, so it wins when both are present.
    let record = employee(&json!({"Id": 5, "id": 9}));
    assert_eq!(record.id, 9);
}

#[rstest]
fn null_alias_falls_through_to_the_next() {
    let record = employee(&json!({"id": null, "IdEmployee": 4}));
    assert_eq!(record.id, 4);
}

#[rstest]
fn unparseable_salary_is_none_not_zero() {
    let record = employee(&json!({"salary": "abc"}));
    assert_eq!(record.salary, None);
}

#[rstest]
#[case::number(json!({"salary": -100.0}))]
#[case::string(json!({"salary": "-100"}))]
fn negative_salary_is_none_not_a_debt(#[case] raw: serde_json::Value) {
    // Salaries are non-negative by contract; a negative source value is as
    // un-canonical as text and must not reach the record.
    assert_eq!(employee(&raw).salary, None);
}

#[rstest]
fn zero_salary_is_zero_not_none() {
    let record = employee(&json!({"salary": 0}));
    assert_eq!(record.salary, Some(0.0));
}

#[rstest]
fn salary_strings_parse_numerically() {
    let record = employee(&json!({"salary": " 1200.50 "}));
    assert_eq!(record.salary, Some(1200.50));
}

#[rstest]
#[case::literal_bool(json!({"active": true}), true)]
#[case::literal_false(json!({"active": false}), false)]
#[case::status_token(json!({"status": "Activo"}), true)]
#[case::status_other(json!({"status": "Suspendido"}), false)]
#[case::or_composition(json!({"active": false, "estado": "activo"}), true)]
#[case::absent(json!({}), false)]
fn active_flag_accepts_bool_or_status_token(#[case] raw: serde_json::Value, #[case] expected: bool) {
    assert_eq!(employee(&raw).active, expected);
}

#[rstest]
fn unexpected_keys_fall_through_to_defaults() {
    // Aliases are enumerated, never case-folded: a typo'd key is ignored.
    let record = employee(&json!({"iD": 12, "NAME": "x"}));
    assert_eq!(record.id, 0);
    assert_eq!(record.name, "");
}

#[rstest]
#[case::scalar(json!(42))]
#[case::null(json!(null))]
#[case::array(json!([1, 2]))]
#[case::string(json!("nope"))]
fn non_object_input_degrades_to_defaults(#[case] raw: serde_json::Value) {
    assert_eq!(employee(&raw), Employee::default());
}

#[rstest]
fn employee_row_carries_the_list_projection() {
    let row = employee_row(&json!({
        "Id": 3,
        "Name": "Luis",
        "Department": "IT",
        "Status": "activo",
    }));
    assert_eq!(row.id, 3);
    assert_eq!(row.department.as_deref(), Some("IT"));
    assert!(row.active);
}

#[rstest]
fn department_normalizes_localized_keys() {
    let record = department(&json!({"IdDepartment": 2, "Nombre": "Planilla"}));
    assert_eq!(record.id, 2);
    assert_eq!(record.name, "Planilla");
    assert_eq!(record.manager, None);
}

#[rstest]
fn position_base_salary_keeps_the_non_collapse_rule() {
    let record = position(&json!({"id": 1, "title": "Clerk", "salarioBase": "n/a"}));
    assert_eq!(record.base_salary, None);
}

#[rstest]
fn position_base_salary_rejects_negatives() {
    let record = position(&json!({"id": 1, "title": "Clerk", "baseSalary": -1}));
    assert_eq!(record.base_salary, None);
}

//! Employee, department, and position records.

use serde::{Deserialize, Serialize};

/// A fully-normalized employee record.
///
/// ## Invariants
/// - Every field has exactly one name and one type regardless of the casing
///   the source used.
/// - `salary` distinguishes "no value" (`None`) from zero; an unparseable
///   source salary never collapses to `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Employee {
    /// Stable employee identifier; 0 when the source carried none.
    pub id: i64,
    /// Display name; empty when the source carried none.
    pub name: String,
    /// National identity document number, when recorded.
    pub dpi: Option<String>,
    /// Department the employee belongs to, when assigned.
    pub department: Option<String>,
    /// Position title, when assigned.
    pub position: Option<String>,
    /// Whether the employee is currently active.
    pub active: bool,
    /// Monthly salary; `None` when unknown or unparseable.
    pub salary: Option<f64>,
    /// Hire date as reported by the backend, passed through verbatim.
    pub hired_on: Option<String>,
}

/// The list-view projection of an employee.
///
/// List endpoints return a narrower shape than the detail endpoint; this row
/// carries only what the table renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct EmployeeRow {
    /// Stable employee identifier; 0 when the source carried none.
    pub id: i64,
    /// Display name; empty when the source carried none.
    pub name: String,
    /// Department the employee belongs to, when assigned.
    pub department: Option<String>,
    /// Whether the employee is currently active.
    pub active: bool,
}

/// A department record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Department {
    /// Stable department identifier; 0 when the source carried none.
    pub id: i64,
    /// Department name; empty when the source carried none.
    pub name: String,
    /// Name of the department manager, when assigned.
    pub manager: Option<String>,
}

/// A position (job title) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Position {
    /// Stable position identifier; 0 when the source carried none.
    pub id: i64,
    /// Position title; empty when the source carried none.
    pub title: String,
    /// Base salary for the position; `None` when unknown or unparseable.
    pub base_salary: Option<f64>,
}

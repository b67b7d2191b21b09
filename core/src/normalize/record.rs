//! Field-level normalization of single records.

use serde_json::Value;

use crate::domain::{Department, Employee, EmployeeRow, Position};

/// Status strings whose lower-cased form marks an employee as active.
const ACTIVE_TOKENS: [&str; 2] = ["activo", "active"];

const EMPLOYEE_ID: [&str; 4] = ["id", "Id", "idEmployee", "IdEmployee"];
const EMPLOYEE_NAME: [&str; 6] = ["name", "Name", "nombre", "Nombre", "fullName", "FullName"];
const EMPLOYEE_DPI: [&str; 3] = ["dpi", "Dpi", "DPI"];
const EMPLOYEE_DEPARTMENT: [&str; 6] = [
    "department",
    "Department",
    "departamento",
    "Departamento",
    "departmentName",
    "DepartmentName",
];
const EMPLOYEE_POSITION: [&str; 4] = ["position", "Position", "puesto", "Puesto"];
const EMPLOYEE_ACTIVE: [&str; 4] = ["active", "Active", "isActive", "IsActive"];
const EMPLOYEE_STATUS: [&str; 4] = ["status", "Status", "estado", "Estado"];
const EMPLOYEE_SALARY: [&str; 6] = [
    "salary",
    "Salary",
    "salario",
    "Salario",
    "baseSalary",
    "BaseSalary",
];
const EMPLOYEE_HIRED_ON: [&str; 6] = [
    "hiredOn",
    "HiredOn",
    "fechaIngreso",
    "FechaIngreso",
    "hireDate",
    "HireDate",
];

const DEPARTMENT_ID: [&str; 4] = ["id", "Id", "idDepartment", "IdDepartment"];
const DEPARTMENT_NAME: [&str; 4] = ["name", "Name", "nombre", "Nombre"];
const DEPARTMENT_MANAGER: [&str; 4] = ["manager", "Manager", "encargado", "Encargado"];

const POSITION_ID: [&str; 4] = ["id", "Id", "idPosition", "IdPosition"];
const POSITION_TITLE: [&str; 6] = ["title", "Title", "puesto", "Puesto", "name", "Name"];
const POSITION_BASE_SALARY: [&str; 6] = [
    "baseSalary",
    "BaseSalary",
    "salarioBase",
    "SalarioBase",
    "salary",
    "Salary",
];

/// Normalize an arbitrary value into an [`Employee`].
///
/// Total: non-object input (or an object carrying none of the known aliases)
/// yields the all-defaults record rather than an error.
#[must_use]
pub fn employee(raw: &Value) -> Employee {
    Employee {
        id: identifier(raw, &EMPLOYEE_ID),
        name: text(raw, &EMPLOYEE_NAME),
        dpi: opt_text(raw, &EMPLOYEE_DPI),
        department: opt_text(raw, &EMPLOYEE_DEPARTMENT),
        position: opt_text(raw, &EMPLOYEE_POSITION),
        active: active_flag(raw),
        salary: opt_number(raw, &EMPLOYEE_SALARY),
        hired_on: opt_text(raw, &EMPLOYEE_HIRED_ON),
    }
}

/// Normalize an arbitrary value into an [`EmployeeRow`].
#[must_use]
pub fn employee_row(raw: &Value) -> EmployeeRow {
    EmployeeRow {
        id: identifier(raw, &EMPLOYEE_ID),
        name: text(raw, &EMPLOYEE_NAME),
        department: opt_text(raw, &EMPLOYEE_DEPARTMENT),
        active: active_flag(raw),
    }
}

/// Normalize an arbitrary value into a [`Department`].
#[must_use]
pub fn department(raw: &Value) -> Department {
    Department {
        id: identifier(raw, &DEPARTMENT_ID),
        name: text(raw, &DEPARTMENT_NAME),
        manager: opt_text(raw, &DEPARTMENT_MANAGER),
    }
}

/// Normalize an arbitrary value into a [`Position`].
#[must_use]
pub fn position(raw: &Value) -> Position {
    Position {
        id: identifier(raw, &POSITION_ID),
        title: text(raw, &POSITION_TITLE),
        base_salary: opt_number(raw, &POSITION_BASE_SALARY),
    }
}

/// First aliased value that is present and non-null.
///
/// JSON null is treated like an absent key so it falls through to the next
/// alias (and ultimately the field default) instead of clobbering it.
fn pick<'a>(raw: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .find_map(|alias| raw.get(alias).filter(|value| !value.is_null()))
}

fn identifier(raw: &Value, aliases: &[&str]) -> i64 {
    pick(raw, aliases).and_then(coerce_integer).unwrap_or(0)
}

fn text(raw: &Value, aliases: &[&str]) -> String {
    pick(raw, aliases)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

fn opt_text(raw: &Value, aliases: &[&str]) -> Option<String> {
    pick(raw, aliases).and_then(Value::as_str).map(str::to_owned)
}

/// Optional money field with the non-collapse rule: an unparseable source
/// value becomes `None`, never `0`, so zero and "no value" stay distinct.
/// Salaries are non-negative by contract, so a negative source value is as
/// un-canonical as text and degrades to `None` too.
fn opt_number(raw: &Value, aliases: &[&str]) -> Option<f64> {
    pick(raw, aliases).and_then(coerce_number)
}

/// Active flag as an OR-composition: a literal boolean `true` on any boolean
/// alias, or a status string whose lower-cased value is an active token.
/// Either source alone is sufficient; any other status text reads as falsy.
fn active_flag(raw: &Value) -> bool {
    let literal = pick(raw, &EMPLOYEE_ACTIVE)
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let status = pick(raw, &EMPLOYEE_STATUS)
        .and_then(Value::as_str)
        .is_some_and(|status| ACTIVE_TOKENS.contains(&status.to_lowercase().as_str()));
    literal || status
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite() && *f >= 0.0)
}

#[cfg(test)]
mod tests;

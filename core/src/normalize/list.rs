//! List-response normalization: envelope extraction plus per-item mapping.

use envelope::RawPage;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{Department, EmployeeRow, Position};
use crate::normalize::record;

/// One normalized page of records.
///
/// `total` is the server-side count when the envelope reported one and the
/// page length otherwise; see the `envelope` crate for the fallback caveat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Normalized records in envelope order.
    pub items: Vec<T>,
    /// Server-reported total, falling back to the page length.
    pub total: u64,
    /// One-based page number.
    pub page: u64,
    /// Page size, falling back to the page length.
    pub page_size: u64,
}

/// Normalize an arbitrary list envelope, mapping each raw item with `map`.
///
/// Non-array and unrecognized envelopes yield an empty page; the mapping
/// function is expected to be total, so the whole pipeline never fails.
#[must_use]
pub fn normalized<T>(raw: &Value, map: impl Fn(&Value) -> T) -> Page<T> {
    let RawPage {
        items,
        total,
        page,
        page_size,
    } = envelope::extract(raw);
    Page {
        items: items.iter().map(map).collect(),
        total,
        page,
        page_size,
    }
}

/// Normalize an employee list response.
#[must_use]
pub fn employees(raw: &Value) -> Page<EmployeeRow> {
    normalized(raw, record::employee_row)
}

/// Normalize a department list response.
#[must_use]
pub fn departments(raw: &Value) -> Page<Department> {
    normalized(raw, record::department)
}

/// Normalize a position list response.
#[must_use]
pub fn positions(raw: &Value) -> Page<Position> {
    normalized(raw, record::position)
}

#[cfg(test)]
mod tests;

//! Normalizers turning loosely-typed response bodies into canonical records.
//!
//! Every function here is pure and total: malformed input degrades to
//! documented defaults instead of failing. Field aliases are enumerated
//! explicitly per record, never matched by reflection or case folding, so a
//! typo'd source key falls through to the default silently and the accepted
//! dialects stay auditable in one place.

mod list;
mod record;

pub use list::{Page, departments, employees, normalized, positions};
pub use record::{department, employee, employee_row, position};

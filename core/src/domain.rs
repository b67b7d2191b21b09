//! Canonical domain records and roles.
//!
//! These types are the single shape the view layer consumes, independent of
//! backend field naming. They are produced exclusively by the normalizers in
//! [`crate::normalize`]; nothing else constructs them from raw responses.

mod employee;
mod role;

pub use employee::{Department, Employee, EmployeeRow, Position};
pub use role::Role;

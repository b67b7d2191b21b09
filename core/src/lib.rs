//! Response-tolerance core for the nomina payroll back office.
//!
//! The dashboard talks to a backend whose field casing, envelope shapes, and
//! error encodings vary across endpoints and deployments. This crate is the
//! layer that absorbs that variance: pure, total normalizers turn arbitrary
//! response bodies into canonical domain records, a classifier turns failed
//! exchanges into a closed set of user-presentable outcomes, and a
//! session-scoped notification channel surfaces them.
//!
//! The UI tree, routing, HTTP transport, and query cache are external
//! collaborators; nothing here performs I/O beyond notification timers.

pub mod classify;
pub mod config;
pub mod domain;
pub mod normalize;
pub mod notify;
pub mod telemetry;

pub use classify::{Classified, RawResponse, classify};
pub use config::{ConfigError, NotifyConfig};
pub use domain::Role;
pub use notify::Notifications;

//! Backend role mapping.

use serde::{Deserialize, Serialize};

/// Frontend role tag controlling which views a session may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// HR staff: record management without administrative settings.
    Staff,
    /// Self-service access only.
    Employee,
}

impl Role {
    /// Map a backend role string onto the closed frontend set.
    ///
    /// The table is enumerated explicitly; unrecognized or absent input maps
    /// to [`Role::Employee`], the least-privileged tag. Unknown roles must
    /// never widen access, so the fallback is fail-closed rather than a
    /// best-effort guess.
    #[must_use]
    pub fn from_backend(raw: Option<&str>) -> Self {
        match raw {
            Some("admin" | "Admin" | "ADMIN" | "Administrador" | "administrador") => Self::Admin,
            Some("staff" | "Staff" | "STAFF" | "rrhh" | "RRHH" | "Rrhh") => Self::Staff,
            _ => Self::Employee,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Employee
    }
}

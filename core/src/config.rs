//! Session-level configuration.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::notify::Kind;

/// Failures raised when parsing configuration text.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text was not valid JSON for [`NotifyConfig`].
    #[error("malformed notification config: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Notification auto-expiry configuration, in milliseconds per kind.
///
/// Defaults keep acknowledgements brief and let warnings and errors linger
/// long enough to read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct NotifyConfig {
    /// Lifetime of success toasts, in milliseconds.
    pub success_ms: u64,
    /// Lifetime of info toasts, in milliseconds.
    pub info_ms: u64,
    /// Lifetime of warning toasts, in milliseconds.
    pub warning_ms: u64,
    /// Lifetime of error toasts, in milliseconds.
    pub error_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            success_ms: 3500,
            info_ms: 3500,
            warning_ms: 5000,
            error_ms: 5000,
        }
    }
}

impl NotifyConfig {
    /// Parse configuration from JSON text, as shipped by the host shell.
    ///
    /// Omitted keys take their defaults; unknown keys are rejected so a
    /// typo'd TTL surfaces at startup instead of silently running with
    /// defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Malformed`] when the text is not valid JSON
    /// or carries unknown keys.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Auto-expiry delay for the given notification kind.
    #[must_use]
    pub const fn ttl(&self, kind: Kind) -> Duration {
        let millis = match kind {
            Kind::Success => self.success_ms,
            Kind::Info => self.info_ms,
            Kind::Warning => self.warning_ms,
            Kind::Error => self.error_ms,
        };
        Duration::from_millis(millis)
    }
}

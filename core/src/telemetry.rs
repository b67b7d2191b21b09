//! Tracing setup for the host application.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the JSON tracing subscriber, filtered by `RUST_LOG`.
///
/// Call once at session start. A second call (or an embedding host that
/// already installed a subscriber) logs a warning instead of failing, so
/// library consumers never crash over logging wiring.
pub fn init() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

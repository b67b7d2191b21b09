//! List-envelope extraction primitives shared by nomina list endpoints.
//!
//! Backend list endpoints disagree on the envelope wrapping their results:
//! some return `{items, total, page, pageSize}`, older deployments return
//! `{Data, Count}`, and the legacy payroll routes return `{registros}` or a
//! bare JSON array. This crate resolves those dialects into one [`RawPage`]
//! of untyped items; callers map each item into a canonical record.
//!
//! Known limitation, preserved deliberately: when an envelope omits `total`
//! the page length is reported instead, so "server sent no total" and
//! "total equals the page length" are indistinguishable here. The correct
//! semantics depend on per-backend contracts this crate cannot observe.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Source keys accepted for the items array, in precedence order.
pub const ITEM_ALIASES: [&str; 6] = ["items", "Items", "data", "Data", "registros", "Registros"];

const TOTAL_ALIASES: [&str; 4] = ["total", "Total", "count", "Count"];
const PAGE_ALIASES: [&str; 4] = ["page", "Page", "pagina", "Pagina"];
const PAGE_SIZE_ALIASES: [&str; 4] = ["pageSize", "PageSize", "limit", "Limit"];

/// One page of untyped list items plus pagination metadata.
///
/// `total` is a server-side count and may exceed `items.len()`; it is not
/// required to equal the page length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawPage {
    /// The items of the current page, still in their source shape.
    pub items: Vec<Value>,
    /// Server-reported total, falling back to the page length.
    pub total: u64,
    /// One-based page number, defaulting to 1.
    pub page: u64,
    /// Requested page size, falling back to the page length.
    pub page_size: u64,
}

/// Failures raised when parsing envelope text before extraction.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The response text was not valid JSON.
    #[error("malformed envelope JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

impl RawPage {
    /// Parse raw response text and extract the page from it.
    ///
    /// # Errors
    /// Returns [`EnvelopeError::MalformedJson`] when the text is not JSON.
    /// Once parsed, extraction itself is total.
    pub fn from_json_str(text: &str) -> Result<Self, EnvelopeError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(extract(&value))
    }

    /// An empty page: no items, total 0, page 1, page size 0.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: 0,
        }
    }
}

impl Default for RawPage {
    fn default() -> Self {
        Self::empty()
    }
}

/// Extract a [`RawPage`] from an arbitrary envelope value.
///
/// The items source is the first alias in [`ITEM_ALIASES`] holding an array;
/// a bare top-level array is accepted as its own items. Anything else yields
/// the empty page. Total and page-size fall back to the item count, the page
/// number to 1.
#[must_use]
pub fn extract(envelope: &Value) -> RawPage {
    let items = resolve_items(envelope);
    let len = u64::try_from(items.len()).unwrap_or(u64::MAX);
    RawPage {
        total: pick_count(envelope, &TOTAL_ALIASES).unwrap_or(len),
        page: pick_count(envelope, &PAGE_ALIASES).filter(|page| *page >= 1).unwrap_or(1),
        page_size: pick_count(envelope, &PAGE_SIZE_ALIASES).unwrap_or(len),
        items,
    }
}

fn resolve_items(envelope: &Value) -> Vec<Value> {
    if let Value::Array(items) = envelope {
        return items.clone();
    }
    ITEM_ALIASES
        .iter()
        .find_map(|alias| envelope.get(alias).and_then(Value::as_array))
        .cloned()
        .unwrap_or_default()
}

/// Read the first aliased field coercible to an unsigned count.
///
/// Accepts JSON numbers and numeric strings; anything else falls through to
/// the next alias so a malformed field degrades rather than fails.
fn pick_count(envelope: &Value, aliases: &[&str]) -> Option<u64> {
    aliases
        .iter()
        .find_map(|alias| envelope.get(alias).and_then(as_count))
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

//! Pagination
//!
//! List endpoints report their position under `meta.pagination`:
//!
//! ```json
//! {"data": [...], "meta": {"pagination": {"current_page": 1, "next_page": 2}}}
//! ```
//!
//! These helpers only read an envelope. Walking the pages is up to the caller,
//! who passes the next page number back as a query parameter.

use serde::Deserialize;
use serde_json::Value;

/// Page returned by `next_page` when the envelope has none
pub const FIRST_PAGE: i64 = 1;

/// Typed view of `meta.pagination`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub current_page: Option<i64>,
    #[serde(default)]
    pub next_page: Option<i64>,
}

impl PageInfo {
    /// Read `meta.pagination` from an envelope, if it is a well-formed object
    pub fn from_envelope(envelope: &Value) -> Option<Self> {
        pagination(envelope).and_then(|meta| Self::deserialize(meta).ok())
    }
}

fn pagination(envelope: &Value) -> Option<&Value> {
    envelope
        .get("meta")
        .and_then(|meta| meta.get("pagination"))
        .filter(|meta| !meta.is_null())
}

fn as_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty() && text != "0",
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
    }
}

fn as_page(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Whether the envelope says another page follows.
///
/// True when pagination metadata is present and `current_page` is strictly
/// less than `next_page`. Without a `current_page`, any non-empty, non-zero
/// `next_page` counts as another page.
pub fn has_more(envelope: &Value) -> bool {
    let Some(meta) = pagination(envelope) else {
        return false;
    };
    let current = meta.get("current_page").filter(|value| !value.is_null());
    if current.is_none() {
        return is_truthy(meta.get("next_page"));
    }
    match (
        as_number(meta.get("current_page")),
        as_number(meta.get("next_page")),
    ) {
        (Some(current), Some(next)) => current < next,
        _ => false,
    }
}

/// The `next_page` the envelope reports, or `1` when it reports none.
pub fn next_page(envelope: &Value) -> i64 {
    pagination(envelope)
        .and_then(|meta| meta.get("next_page"))
        .and_then(as_page)
        .unwrap_or(FIRST_PAGE)
}

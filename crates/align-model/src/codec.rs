//! YAML encoding of charts
//!
//! Decoding goes through [`serde_yaml`], which only ever builds data: tags
//! and anchors never trigger code, so charts keyed by an externally
//! influenced community id are safe to load.
//!
//! ```text
//! bytes → parse → serde_yaml::Value → RawChart → normalize → Chart
//! Chart → serialize → bytes
//! ```
//!
//! The document shape (a mapping with `users` and `admins`) must decode for
//! `parse` to succeed. Single entries inside `users` are decoded one by one;
//! an entry that does not decode is kept verbatim and written back as is.

use crate::chart::{Chart, Slot, UserEntry};
use crate::error::ChartError;
use crate::ids::UserId;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

/// A decoded chart mapping before defaults are applied
///
/// Every section is optional so that files from older schemas (no `admins`),
/// empty mappings, and explicit `null`s all decode. Unknown keys are dropped.
/// User entries stay undecoded until [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawChart {
    /// `users` section, if present and non-null
    #[serde(default)]
    pub users: Option<IndexMap<UserId, Value>>,
    /// `admins` section, if present and non-null
    #[serde(default)]
    pub admins: Option<Vec<UserId>>,
}

impl From<RawChart> for Chart {
    fn from(raw: RawChart) -> Self {
        normalize(raw)
    }
}

/// Fill in missing sections with their empty defaults
///
/// Total: never fails. Duplicate admin ids collapse to one. Entries that do
/// not decode as a [`UserEntry`] are kept as unreadable slots, see
/// [`Chart::unreadable_ids`].
#[must_use]
pub fn normalize(raw: RawChart) -> Chart {
    let users = raw
        .users
        .unwrap_or_default()
        .into_iter()
        .map(|(id, value)| (id, decode_entry(value)))
        .collect();

    Chart {
        users,
        admins: raw.admins.unwrap_or_default().into_iter().collect(),
    }
}

fn decode_entry(value: Value) -> Slot {
    match UserEntry::deserialize(&value) {
        Ok(entry) => Slot::Entry(entry),
        Err(_) => Slot::Unreadable(value),
    }
}

/// Decode stored bytes into a normalized chart
///
/// Empty input, whitespace, or a document that decodes to a falsy value
/// (`null`, `false`, `0`, `""`, `{}`, `[]`) yields the canonical empty chart.
///
/// # Errors
/// [`ChartError::MalformedChart`] if the bytes are not UTF-8, not YAML, or
/// not shaped like a chart. A bad single entry is not an error.
pub fn parse(bytes: &[u8]) -> Result<Chart, ChartError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ChartError::malformed(format!("invalid utf-8: {e}")))?;

    if text.trim().is_empty() {
        return Ok(Chart::new());
    }

    let value: Value = serde_yaml::from_str(text).map_err(ChartError::from_yaml)?;
    if is_falsy(&value) {
        return Ok(Chart::new());
    }

    let raw: RawChart = serde_yaml::from_value(value).map_err(ChartError::from_yaml)?;
    Ok(normalize(raw))
}

/// Encode a chart as YAML bytes
///
/// Output is stable for equal input: `users` precedes `admins`, entries
/// keep their stored order, and entry fields are always written as
/// `alignment`, `display_name`, `avatar_url`.
///
/// # Errors
/// [`ChartError::Serialize`] if the encoder fails.
pub fn serialize(chart: &Chart) -> Result<Vec<u8>, ChartError> {
    serde_yaml::to_string(chart)
        .map(String::into_bytes)
        .map_err(ChartError::Serialize)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(_) => false,
    }
}

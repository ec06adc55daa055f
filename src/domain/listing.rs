use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical listing identifier.
///
/// Hostaway sends `listingMapId` as a number while configured ids are strings,
/// so both are folded into one trimmed string key at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Build from a loosely typed JSON value. Anything that is neither a
    /// number nor a string yields the empty id, which matches no listing.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::new(s),
            Value::Number(n) => Self(number_key(n)),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Integral floats (`42.0`) render without the fraction so they match `"42"`.
#[allow(clippy::cast_possible_truncation)]
fn number_key(n: &serde_json::Number) -> String {
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for ListingId {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id: ListingId,
}

impl Listing {
    pub fn new(id: impl Into<ListingId>) -> Self {
        Self { id: id.into() }
    }

    /// Build the configured listing set, preserving order.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Vec<Self> {
        ids.iter()
            .map(|id| ListingId::new(id.as_ref()))
            .filter(|id| !id.is_empty())
            .map(|id| Self { id })
            .collect()
    }
}

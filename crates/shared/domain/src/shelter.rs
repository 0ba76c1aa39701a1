//! Shelter records and per-category bed capacities.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique, stable identity key of a shelter within a directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ShelterKey(pub u32);

impl fmt::Display for ShelterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ShelterKey {
    fn from(key: u32) -> Self {
        Self(key)
    }
}

/// A (category, beds, available) triple for one demographic bucket.
///
/// Source data encodes "unknown" as `-1`; that sentinel is resolved to
/// [`None`] at the serde boundary and never reaches predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Free-text bucket label, e.g. `"Men"` or `"Families w/ children"`.
    pub category: String,
    /// Total beds in this bucket, when known.
    #[serde(default, deserialize_with = "unknown_as_none")]
    pub beds: Option<u32>,
    /// Currently available beds in this bucket, when known.
    #[serde(default, deserialize_with = "unknown_as_none")]
    pub available: Option<u32>,
}

impl Capacity {
    pub fn new(category: impl Into<String>, beds: Option<u32>, available: Option<u32>) -> Self {
        Self { category: category.into(), beds, available }
    }

    /// Whether this bucket is known to have at least one free bed.
    /// Unknown availability never counts as available.
    #[must_use]
    pub fn has_space(&self) -> bool {
        self.available.is_some_and(|n| n > 0)
    }
}

/// A facility with identity, contact info, and per-category bed capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelter {
    pub key: ShelterKey,
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub restrictions: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub capacities: Vec<Capacity>,
}

impl Shelter {
    /// Whether any capacity bucket is known to have a free bed.
    #[must_use]
    pub fn has_space(&self) -> bool {
        self.capacities.iter().any(Capacity::has_space)
    }
}

/// Maps legacy `-1` ("unknown") counters to `None`; non-negative values pass through.
fn unknown_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| u32::try_from(value).ok()))
}

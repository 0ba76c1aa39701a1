//! Search criteria for directory lookups.
//!
//! The legacy UI encoded "no filter" as the `"Any"` spinner item or an empty
//! search string. Those sentinels are resolved here, once, into `Option`
//! fields; predicates only ever see active criteria.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Age bucket a shelter may serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum AgeBucket {
    Children,
    #[strum(to_string = "Young adults", serialize = "young-adults", serialize = "young_adults")]
    YoungAdults,
    Anyone,
}

/// Gender bucket a shelter may serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum GenderBucket {
    Men,
    Women,
}

/// Sentinel meaning "no filter" for bucket selections.
const ANY: &str = "Any";

/// Zero or more active filter criteria. `None` means the dimension is
/// inactive and contributes the full directory to the intersection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub name: Option<String>,
    pub age: Option<AgeBucket>,
    pub gender: Option<GenderBucket>,
}

impl SearchFilter {
    /// Builds a filter from raw UI selections, resolving the `"Any"` and
    /// empty-string sentinels. Unrecognized bucket labels deactivate the
    /// dimension rather than erroring.
    #[must_use]
    pub fn from_selections(name: &str, age: &str, gender: &str) -> Self {
        Self {
            name: parse_name(name),
            age: parse_bucket(age),
            gender: parse_bucket(gender),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn with_age(mut self, age: AgeBucket) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub const fn with_gender(mut self, gender: GenderBucket) -> Self {
        self.gender = Some(gender);
        self
    }

    /// True when no criterion is active.
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }
}

fn parse_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn parse_bucket<B: FromStr>(raw: &str) -> Option<B> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY) {
        return None;
    }
    B::from_str(trimmed).ok()
}

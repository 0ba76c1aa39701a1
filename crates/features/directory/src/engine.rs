use crate::error::DirectoryError;
use fxhash::{FxHashMap, FxHashSet};
use haven_domain::{AgeBucket, GenderBucket, SearchFilter, Shelter, ShelterKey};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
struct DirectoryInner {
    shelters: FxHashMap<ShelterKey, Arc<Shelter>>,
}

/// An immutable snapshot of the shelter directory.
///
/// The snapshot is reference-counted; cloning the handle is cheap and safe to
/// hand to readers on other tasks. Once built it never changes — a fresh
/// snapshot replaces it wholesale when the source is reloaded.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    inner: Arc<DirectoryInner>,
}

impl Directory {
    /// Builds a snapshot from the full shelter collection.
    ///
    /// # Errors
    /// Returns [`DirectoryError::DuplicateKey`] when two shelters share a key.
    pub fn from_shelters(
        shelters: impl IntoIterator<Item = Shelter>,
    ) -> Result<Self, DirectoryError> {
        let mut map = FxHashMap::default();
        for shelter in shelters {
            let key = shelter.key;
            if map.insert(key, Arc::new(shelter)).is_some() {
                return Err(DirectoryError::DuplicateKey { key });
            }
        }

        debug!(shelters = map.len(), "Directory snapshot built");
        Ok(Self { inner: Arc::new(DirectoryInner { shelters: map }) })
    }

    /// Looks up a single shelter by key.
    #[must_use]
    pub fn get(&self, key: ShelterKey) -> Option<Arc<Shelter>> {
        self.inner.shelters.get(&key).cloned()
    }

    /// A fresh set of every key in the directory.
    #[must_use]
    pub fn keys(&self) -> FxHashSet<ShelterKey> {
        self.inner.shelters.keys().copied().collect()
    }

    /// Iterates over all shelters in no defined order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Shelter>> {
        self.inner.shelters.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.shelters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.shelters.is_empty()
    }

    /// All shelters whose name contains `substring`, case-insensitively.
    ///
    /// The empty substring matches every shelter; callers treating `""` as
    /// "no filter" resolve that before calling (see [`SearchFilter`]).
    #[must_use]
    pub fn match_name(&self, substring: &str) -> FxHashSet<ShelterKey> {
        let needle = substring.to_lowercase();
        self.collect_keys(|shelter| shelter.name.to_lowercase().contains(&needle))
    }

    /// All shelters with at least one capacity entry for the given age bucket.
    #[must_use]
    pub fn match_age(&self, bucket: AgeBucket) -> FxHashSet<ShelterKey> {
        self.match_category(&bucket.to_string())
    }

    /// All shelters with at least one capacity entry for the given gender bucket.
    #[must_use]
    pub fn match_gender(&self, bucket: GenderBucket) -> FxHashSet<ShelterKey> {
        self.match_category(&bucket.to_string())
    }

    /// Combines the active criteria of `filter` into one result set.
    ///
    /// Inactive criteria contribute the full key set, so the intersection is
    /// a no-op for that dimension and criterion order cannot matter.
    #[must_use]
    pub fn search(&self, filter: &SearchFilter) -> FxHashSet<ShelterKey> {
        let by_name = filter.name.as_deref().map_or_else(|| self.keys(), |n| self.match_name(n));
        let by_age = filter.age.map_or_else(|| self.keys(), |b| self.match_age(b));
        let by_gender = filter.gender.map_or_else(|| self.keys(), |b| self.match_gender(b));

        intersect(&by_name, &by_age, &by_gender)
    }

    fn match_category(&self, label: &str) -> FxHashSet<ShelterKey> {
        self.collect_keys(|shelter| {
            shelter.capacities.iter().any(|cap| category_matches(&cap.category, label))
        })
    }

    fn collect_keys(&self, predicate: impl Fn(&Shelter) -> bool) -> FxHashSet<ShelterKey> {
        self.inner
            .shelters
            .values()
            .filter(|shelter| predicate(shelter))
            .map(|shelter| shelter.key)
            .collect()
    }
}

/// Three-way set intersection across the active criteria sets.
///
/// Commutative and associative; `intersect(&s, &s, &s) == s`.
#[must_use]
pub fn intersect(
    a: &FxHashSet<ShelterKey>,
    b: &FxHashSet<ShelterKey>,
    c: &FxHashSet<ShelterKey>,
) -> FxHashSet<ShelterKey> {
    // Drive the scan from the smallest set.
    let mut sets = [a, b, c];
    sets.sort_by_key(|s| s.len());
    sets[0].iter().filter(|k| sets[1].contains(k) && sets[2].contains(k)).copied().collect()
}

/// Whether a bucket label occurs as a whole word inside a free-text capacity
/// category. Word-boundary matching keeps `Men` from matching `Women`.
fn category_matches(category: &str, label: &str) -> bool {
    let haystack = category.to_lowercase();
    let needle = label.to_lowercase();
    if needle.is_empty() {
        return false;
    }

    let mut start = 0;
    while let Some(pos) = haystack[start..].find(&needle) {
        let begin = start + pos;
        let end = begin + needle.len();
        let bounded_left =
            !haystack[..begin].chars().next_back().is_some_and(char::is_alphanumeric);
        let bounded_right = !haystack[end..].chars().next().is_some_and(char::is_alphanumeric);
        if bounded_left && bounded_right {
            return true;
        }
        start = end;
    }
    false
}

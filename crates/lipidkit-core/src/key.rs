use crate::normalize::{display_variant, normalize};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical identity of a construct as seen in one raw label.
///
/// Equality and hashing only look at `normalized`: two keys built from `"(V_A_K)80"` and
/// `"(v/a/k) 80"` compare equal even though their `raw` and `display` differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructKey {
    pub raw: String,
    pub normalized: String,
    pub display: String,
}

impl ConstructKey {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            normalized: normalize(&raw),
            display: display_variant(&raw),
            raw,
        }
    }

    pub fn same_construct(&self, other: &str) -> bool {
        self.normalized == normalize(other)
    }
}

impl PartialEq for ConstructKey {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for ConstructKey {}

impl std::hash::Hash for ConstructKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl From<&str> for ConstructKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ConstructKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// Groups raw names by normalized key. Groups appear in first-seen order and keep their
/// members in input order.
pub fn group_by_key<I, S>(names: I) -> IndexMap<String, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for name in names {
        let name = name.as_ref();
        groups
            .entry(normalize(name))
            .or_default()
            .push(name.to_string());
    }
    groups
}

/// Normalized key -> raw name. When two names share a key, the later one wins.
pub fn index_by_key<I, S>(names: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: IndexMap<String, String> = IndexMap::new();
    for name in names {
        let name = name.as_ref();
        if let Some(previous) = index.insert(normalize(name), name.to_string()) {
            tracing::debug!(previous = %previous, replacement = %name, "construct key collision; keeping the later name");
        }
    }
    index
}

/// Drops exact duplicates and blank entries, keeping first occurrences in order.
pub fn dedup_preserving_order<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = rustc_hash::FxHashSet::default();
    let mut out = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.to_string()) {
            out.push(name.to_string());
        }
    }
    out
}

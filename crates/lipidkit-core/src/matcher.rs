use crate::disambiguate::apply_disambiguation_suffix;
use crate::normalize::normalize;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One named list of raw construct names (a CSV page, a theoretical-mass table, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSource {
    pub label: String,
    pub names: Vec<String>,
    /// Try the suffixed key of every name before the plain one.
    pub disambiguate: bool,
}

impl NameSource {
    pub fn new<I, S>(label: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            names: names.into_iter().map(Into::into).collect(),
            disambiguate: false,
        }
    }

    pub fn disambiguated(mut self) -> Self {
        self.disambiguate = true;
        self
    }
}

/// A matched item key together with the raw name that claimed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedName {
    pub key: String,
    /// Raw name from the winning source; the key itself for leftovers.
    pub raw: String,
    /// Label of the winning source, `None` for leftovers.
    pub source: Option<String>,
}

impl MatchedName {
    pub fn is_leftover(&self) -> bool {
        self.source.is_none()
    }

    /// Applies a caller-supplied display formatter to the raw name.
    pub fn display_with<F>(&self, format: F) -> String
    where
        F: Fn(&str) -> String,
    {
        format(&self.raw)
    }
}

/// Orders `item_keys` by the priority of `sources`.
///
/// `item_keys` must already be normalized (see [`normalize`] and
/// [`crate::base_name_from_file`]). Sources are visited in slice order and every key is
/// emitted at most once, claimed by the first name that maps to it. Keys no source
/// mentions are appended afterwards in input order, with the key as their `raw` name.
pub fn match_across_sources(
    item_keys: &IndexSet<String>,
    sources: &[NameSource],
    suffix: &str,
) -> Vec<MatchedName> {
    let items: IndexMap<String, String> = item_keys
        .iter()
        .map(|key| (key.clone(), key.clone()))
        .collect();
    match_indexed_sources(&items, sources, suffix)
}

/// Like [`match_across_sources`], over a normalized key -> raw name index such as
/// [`crate::index_by_key`] builds. Leftovers keep their raw name from the index.
pub fn match_indexed_sources(
    items: &IndexMap<String, String>,
    sources: &[NameSource],
    suffix: &str,
) -> Vec<MatchedName> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::with_capacity(items.len());

    for source in sources {
        for raw in &source.names {
            let mut candidates: Vec<String> = Vec::with_capacity(2);
            if source.disambiguate {
                candidates.push(normalize(&apply_disambiguation_suffix(raw, suffix)));
            }
            candidates.push(normalize(raw));

            let claimed = candidates.into_iter().find_map(|candidate| {
                let (key, _) = items.get_key_value(&candidate)?;
                (!seen.contains(key.as_str())).then_some(key)
            });

            match claimed {
                Some(key) => {
                    seen.insert(key.as_str());
                    out.push(MatchedName {
                        key: key.clone(),
                        raw: raw.clone(),
                        source: Some(source.label.clone()),
                    });
                }
                None => {
                    tracing::trace!(source = %source.label, name = %raw, "name matches no unclaimed item");
                }
            }
        }
    }

    for (key, raw) in items {
        if seen.insert(key.as_str()) {
            out.push(MatchedName {
                key: key.clone(),
                raw: raw.clone(),
                source: None,
            });
        }
    }

    out
}

/// Keeps the keys accepted by `allowed`, preserving order. An empty filter accepts
/// everything, matching a run with no source tables at all.
pub fn filter_allowed<I, S>(keys: I, allowed: &FxHashSet<String>) -> IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keys.into_iter()
        .map(Into::into)
        .filter(|key| allowed.is_empty() || allowed.contains(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disambiguate::DEFAULT_SUFFIX;

    fn keys(items: &[&str]) -> IndexSet<String> {
        items.iter().map(|s| normalize(s)).collect()
    }

    #[test]
    fn earlier_source_claims_the_key() {
        let items = keys(&["ggg"]);
        let sources = vec![
            NameSource::new("a", ["GGG"]),
            NameSource::new("b", [" ggg"]),
        ];
        let out = match_across_sources(&items, &sources, DEFAULT_SUFFIX);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].raw, "GGG");
        assert_eq!(out[0].source.as_deref(), Some("a"));
    }

    #[test]
    fn disambiguated_variant_is_preferred() {
        let items = keys(&["SSS", "SSS_p3distinct"]);
        let sources = vec![
            NameSource::new("page1", ["SSS"]),
            NameSource::new("page3", ["SSS"]).disambiguated(),
        ];
        let out = match_across_sources(&items, &sources, DEFAULT_SUFFIX);
        let got: Vec<(&str, Option<&str>)> = out
            .iter()
            .map(|m| (m.key.as_str(), m.source.as_deref()))
            .collect();
        assert_eq!(
            got,
            vec![("sss", Some("page1")), ("sss_p3distinct", Some("page3"))]
        );
    }

    #[test]
    fn disambiguated_source_falls_back_to_plain_key() {
        let items = keys(&["K80"]);
        let sources = vec![NameSource::new("page3", ["K80"]).disambiguated()];
        let out = match_across_sources(&items, &sources, DEFAULT_SUFFIX);
        assert_eq!(out[0].key, "k80");
        assert_eq!(out[0].source.as_deref(), Some("page3"));
    }

    #[test]
    fn leftovers_follow_in_caller_order() {
        let items = keys(&["zzz", "aaa", "mmm"]);
        let sources = vec![NameSource::new("page1", ["MMM", "stale"])];
        let out = match_across_sources(&items, &sources, DEFAULT_SUFFIX);
        let order: Vec<&str> = out.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(order, vec!["mmm", "zzz", "aaa"]);
        assert!(!out[0].is_leftover());
        assert!(out[1].is_leftover());
        assert_eq!(out[1].raw, "zzz");
    }

    #[test]
    fn indexed_leftovers_keep_their_raw_spelling() {
        let items = crate::index_by_key(["SSS", "Unlipidated ASL"]);
        let sources = vec![NameSource::new("page1", ["sss"])];
        let out = match_indexed_sources(&items, &sources, DEFAULT_SUFFIX);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].raw, "sss");
        assert!(out[1].is_leftover());
        assert_eq!(out[1].key, "unlipidatedasl");
        assert_eq!(out[1].raw, "Unlipidated ASL");
    }

    #[test]
    fn display_with_uses_raw_name() {
        let m = MatchedName {
            key: "k80".into(),
            raw: "K80".into(),
            source: Some("page3".into()),
        };
        assert_eq!(m.display_with(|raw| format!("[{raw}]")), "[K80]");
    }

    #[test]
    fn filter_allowed_keeps_order_and_accepts_all_when_empty() {
        let mut allowed = FxHashSet::default();
        allowed.insert("b".to_string());
        let kept = filter_allowed(["a", "b", "c"], &allowed);
        assert_eq!(kept.into_iter().collect::<Vec<_>>(), vec!["b".to_string()]);

        let all = filter_allowed(["a", "b"], &FxHashSet::default());
        assert_eq!(all.len(), 2);
    }
}

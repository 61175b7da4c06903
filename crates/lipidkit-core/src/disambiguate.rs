use crate::normalize::normalize;
use indexmap::IndexMap;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Tag appended to names from a table whose series must not be averaged with same-named
/// series from earlier tables.
pub const DEFAULT_SUFFIX: &str = "_p3distinct";

/// Marker the chromatogram plotter appends to every image stem.
pub const CHROM_MARKER: &str = "_chrom";

pub fn apply_disambiguation_suffix(raw: &str, suffix: &str) -> String {
    format!("{raw}{suffix}")
}

/// Inverse of [`apply_disambiguation_suffix`]. Names without the suffix are returned as-is.
pub fn strip_disambiguation_suffix(raw: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return raw.to_string();
    }
    raw.strip_suffix(suffix).unwrap_or(raw).to_string()
}

pub fn has_disambiguation_suffix(raw: &str, suffix: &str) -> bool {
    !suffix.is_empty() && raw.ends_with(suffix)
}

/// Strips one trailing `marker` from a file stem.
pub fn strip_marker(stem: &str, marker: &str) -> String {
    if marker.is_empty() {
        return stem.to_string();
    }
    stem.strip_suffix(marker).unwrap_or(stem).to_string()
}

/// `"SSS_chrom"` -> `"SSS"`, so a plot file and the column it came from share a key.
pub fn base_name_from_file(stem: &str) -> String {
    strip_marker(stem, CHROM_MARKER)
}

fn page_tag_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_p\d+$").expect("valid regex"))
}

/// Drops a trailing `_p<N>` page tag added while merging multi-page exports
/// (`"SSS_p2"` -> `"SSS"`). The disambiguation suffix is not a page tag.
pub fn page_base_name(column: &str) -> String {
    page_tag_regex().replace(column, "").into_owned()
}

/// Every normalized name of every source, each both plain and suffixed, so a filter built
/// from it accepts either variant.
pub fn build_allowed_set<I, N>(sources: I, suffix: &str) -> FxHashSet<String>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let mut allowed = FxHashSet::default();
    for source in sources {
        for name in source {
            let name = name.as_ref();
            allowed.insert(normalize(name));
            allowed.insert(normalize(&apply_disambiguation_suffix(name, suffix)));
        }
    }
    allowed
}

/// Renames the names of a later source that collide with any earlier source.
///
/// Collisions are decided on normalized keys. Returns the names in input order, suffixed
/// where needed.
pub fn disambiguate_collisions<S, N>(prior_sources: &[S], names: &[N], suffix: &str) -> Vec<String>
where
    S: AsRef<[N]>,
    N: AsRef<str>,
{
    let renames = collision_renames(prior_sources, names, suffix);
    names
        .iter()
        .map(|name| rekey(name.as_ref(), &renames))
        .collect()
}

/// The renames [`disambiguate_collisions`] would apply, original name -> suffixed name, in
/// input order. Names that do not collide are absent.
pub fn collision_renames<S, N>(
    prior_sources: &[S],
    names: &[N],
    suffix: &str,
) -> IndexMap<String, String>
where
    S: AsRef<[N]>,
    N: AsRef<str>,
{
    let prior: FxHashSet<String> = prior_sources
        .iter()
        .flat_map(|source| source.as_ref().iter().map(|n| normalize(n.as_ref())))
        .collect();

    let mut renames = IndexMap::new();
    for name in names {
        let name = name.as_ref();
        if prior.contains(&normalize(name)) {
            tracing::debug!(name, suffix, "disambiguating name shared with an earlier source");
            renames.insert(name.to_string(), apply_disambiguation_suffix(name, suffix));
        }
    }
    renames
}

/// Looks `name` up in a rename map, keeping it as-is when it was not renamed.
///
/// Used to carry per-column facts recorded before disambiguation (such as
/// [`crate::header::alternate_time_columns`]) over to the renamed columns.
pub fn rekey(name: &str, renames: &IndexMap<String, String>) -> String {
    renames.get(name).cloned().unwrap_or_else(|| name.to_string())
}

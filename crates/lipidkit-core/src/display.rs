//! Display-label helpers. None of these feed back into matching; they run at render time.

use crate::disambiguate::strip_disambiguation_suffix;
use regex::Regex;

fn chromatogram_prefix_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*HPLC\s*chromatograms?\s*[-:]*\s*").expect("valid regex")
    })
}

fn methylated_k80_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bm[-_\s]*k80\b").expect("valid regex"))
}

fn k80_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bk80\b").expect("valid regex"))
}

/// Strips the disambiguation suffix, an `HPLC chromatogram -` style prefix and stray
/// `-`/`:` separators at either end.
pub fn clean_display_name(name: &str, suffix: &str) -> String {
    let s = strip_disambiguation_suffix(name.trim_end(), suffix);
    let s = chromatogram_prefix_regex().replace(&s, "");
    s.trim()
        .trim_matches(|c| c == '-' || c == ':')
        .trim()
        .to_string()
}

/// Spells out the `K80` shorthand: `m-K80` -> `m-(V/A/K)80`, `K80` -> `(V/A/K)80`.
pub fn apply_label_aliases(label: &str) -> String {
    // The methylated form goes first so its `K80` is not rewritten twice.
    let s = methylated_k80_regex().replace_all(label, "m-(V/A/K)80");
    k80_regex().replace_all(&s, "(V/A/K)80").into_owned()
}

fn digit_run_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("valid regex"))
}

fn three_letters_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]{3}$").expect("valid regex"))
}

fn n15_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)N15").expect("valid regex"))
}

/// Standalone `30`, `40` and `80` become mathtext subscripts: `"K80"` -> `"K$_{80}$"`.
/// Longer numbers such as `800` are left alone.
pub fn format_title_subscripts(name: &str) -> String {
    digit_run_regex()
        .replace_all(name, |caps: &regex::Captures<'_>| match &caps[0] {
            digits @ ("30" | "40" | "80") => format!("$_{{{digits}}}$"),
            other => other.to_string(),
        })
        .into_owned()
}

/// Which HPLC pages list a construct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMembership {
    pub page1: bool,
    pub page2: bool,
    pub page3: bool,
}

/// Plot title for a construct, depending on the pages it appears on.
///
/// Bare three-letter sequences are the lipidated V30 constructs: `m-[XXX]-V30` on pages 1
/// and 2, `[XXX]-V30` on page 3. Page 3 also writes `N15` as a `$^{15}$N` superscript.
/// Aliases and subscripts are applied last. Suitable for [`crate::MatchedName::display_with`].
pub fn format_title(raw: &str, suffix: &str, pages: PageMembership) -> String {
    let mut name = clean_display_name(raw, suffix);
    let three_letters = three_letters_regex().is_match(&name);

    if pages.page3 {
        name = n15_regex().replace_all(&name, "$$^{15}$$N").into_owned();
    }
    if pages.page3 && three_letters {
        name = format!("[{name}]-V30");
    } else if (pages.page1 || pages.page2) && three_letters {
        name = format!("m-[{name}]-V30");
    }

    format_title_subscripts(&apply_label_aliases(&name))
}

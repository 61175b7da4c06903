//! Construct-name normalization.
//!
//! Every transformation is a total `&str -> String` stage. The public entry points
//! ([`normalize`], [`display_variant`], [`file_stem_slug`], [`underscore_key`]) are fixed
//! pipelines over those stages, so each stage can be tested on its own.

use regex::Regex;

/// A single total string transformation.
pub type Stage = fn(&str) -> String;

/// Stages behind [`normalize`], in application order.
pub const MATCH_KEY_STAGES: &[Stage] = &[
    stages::strip_invisible,
    stages::remove_whitespace,
    stages::slash_parenthesized,
    stages::lowercase,
];

/// Stages behind [`display_variant`], in application order.
pub const DISPLAY_STAGES: &[Stage] = &[
    stages::strip_invisible,
    stages::trim,
    stages::slash_parenthesized,
];

/// Runs `input` through `stages` left to right.
pub fn run_stages(stages: &[Stage], input: &str) -> String {
    let mut cur = input.to_string();
    for stage in stages {
        cur = stage(&cur);
    }
    cur
}

/// Canonical comparison key for a construct name.
///
/// `normalize("(V_A_K)80") == normalize(" (v/a/k) 80")`. Never fails; input made only of
/// ignorable characters normalizes to the empty string.
pub fn normalize(raw: &str) -> String {
    run_stages(MATCH_KEY_STAGES, raw)
}

/// Human-preferred rendering: like [`normalize`] but keeps case and internal spaces.
pub fn display_variant(raw: &str) -> String {
    run_stages(DISPLAY_STAGES, raw)
}

/// File-name-safe stem for a construct name. Falls back to `"plot"` when nothing survives.
///
/// Accented letters keep their base letter (`"Café"` -> `"Cafe"`); anything else outside
/// `[A-Za-z0-9._-]` becomes `_`.
pub fn file_stem_slug(name: &str) -> String {
    let folded = stages::fold_compatibility(name);
    let replaced = invalid_stem_chars_regex().replace_all(&folded, "_");
    let collapsed = stages::collapse_underscores(&replaced);
    let trimmed = collapsed.trim_matches(|c| matches!(c, '.' | '_' | ' '));
    if trimmed.is_empty() {
        "plot".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Underscore-joined key used when construct names have to line up with file names
/// written by the plotting scripts (`"m-V30 (a)"` -> `"m-V30_a"`).
pub fn underscore_key(name: &str) -> String {
    let s = name.trim().replace(' ', "_");
    let s = non_word_run_regex().replace_all(&s, "_");
    let s = stages::collapse_underscores(&s);
    s.trim_matches('_').to_string()
}

fn invalid_stem_chars_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid regex"))
}

fn non_word_run_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\-]+").expect("valid regex"))
}

pub mod stages {
    use regex::Regex;
    use unicode_normalization::UnicodeNormalization;
    use unicode_normalization::char::is_combining_mark;

    fn is_invisible(ch: char) -> bool {
        matches!(ch, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}')
    }

    fn parenthesized_regex() -> &'static Regex {
        static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\(([^)]*)\)").expect("valid regex"))
    }

    fn underscore_run_regex() -> &'static Regex {
        static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| Regex::new(r"_+").expect("valid regex"))
    }

    /// Drops zero-width spaces/joiners and byte-order marks.
    pub fn strip_invisible(input: &str) -> String {
        input.chars().filter(|&ch| !is_invisible(ch)).collect()
    }

    pub fn trim(input: &str) -> String {
        input.trim().to_string()
    }

    /// Removes all whitespace, leading, trailing and internal.
    pub fn remove_whitespace(input: &str) -> String {
        input.chars().filter(|ch| !ch.is_whitespace()).collect()
    }

    /// `(V_A_K)` -> `(V/A/K)`; underscores outside parentheses are kept.
    pub fn slash_parenthesized(input: &str) -> String {
        parenthesized_regex()
            .replace_all(input, |caps: &regex::Captures<'_>| {
                format!("({})", caps[1].replace('_', "/"))
            })
            .into_owned()
    }

    pub fn lowercase(input: &str) -> String {
        input.to_lowercase()
    }

    pub fn collapse_underscores(input: &str) -> String {
        underscore_run_regex().replace_all(input, "_").into_owned()
    }

    /// NFKD decomposition with combining marks dropped: `"é"` -> `"e"`, `"ﬁ"` -> `"fi"`.
    pub fn fold_compatibility(input: &str) -> String {
        input.nfkd().filter(|&ch| !is_combining_mark(ch)).collect()
    }

}

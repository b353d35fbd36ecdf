// src/core/fold.rs

// Text normalization used for matching author names.

use deunicode::deunicode;

/// Transliterate to plain ASCII: "Charlotte Brontë" → "Charlotte Bronte".
pub fn ascii_fold(s: &str) -> String {
    deunicode(s)
}

/// ASCII fold then lowercase; the form used for name comparison.
pub fn match_key(s: &str) -> String {
    ascii_fold(s).to_lowercase()
}

/// Case- and accent-insensitive substring test.
pub fn folded_contains(haystack: &str, needle: &str) -> bool {
    match_key(haystack).contains(&match_key(needle))
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

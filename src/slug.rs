//! URL slugs derived from display strings.
//!
//! Published links depend on the exact output of [`slugify`], so the rules are
//! reproduced literally, including the quirks:
//!
//! - whitespace is trimmed *before* punctuation is removed, so `"Help ?"`
//!   becomes `"help-"` while `"Help?"` becomes `"help"`
//! - leading and trailing hyphens are never stripped
//! - distinct titles may share a slug; lookups take the first record
//!
//! A word character is a letter, a number of any kind (`²`, `½`), or `_`.
//! Combining marks are not word characters and are deleted. Whitespace also
//! covers the information separators U+001C..=U+001F.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not a word character, whitespace, or a hyphen.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\x1C-\x1F-]").expect("valid slug regex")
});

/// A run of hyphens and/or whitespace.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s\x1C-\x1F]+").expect("valid slug regex"));

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

/// Convert a display string into its URL slug.
///
/// 1. lowercase and trim
/// 2. delete every character that is not a letter, number, `_`, whitespace, or `-`
/// 3. collapse each run of hyphens/whitespace into a single `-`
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept = DISALLOWED.replace_all(lowered.trim_matches(is_space), "");
    SEPARATOR_RUN.replace_all(&kept, "-").into_owned()
}

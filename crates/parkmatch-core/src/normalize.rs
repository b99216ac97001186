//! Park-name normalization.
//!
//! One pipeline serves both catalog deduplication and search matching; the
//! two callers differ only in the stopword list they trim with:
//!
//! 1. case-fold and transliterate to ASCII (diacritics dropped),
//! 2. replace punctuation and symbols with whitespace,
//! 3. tokenize on whitespace,
//! 4. pop stopword tokens off the end while more than one token remains,
//! 5. rejoin with single spaces.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_]+").expect("valid regex"));

/// Generic venue words trimmed before catalog deduplication.
pub const PARK_STOPWORDS: &[&str] = &[
    "park",
    "parc",
    "parque",
    "resort",
    "resorts",
    "theme",
    "amusement",
    "attractions",
    "attraction",
    "le",
    "la",
    "les",
    "the",
];

/// Generic venue words and fr/en articles trimmed before search matching.
pub const MATCH_STOPWORDS: &[&str] = &[
    "park", "theme", "amusement", "resort", "world", "studio", "studios", "ride", "rides", "the",
    "a", "an", "le", "la", "les", "de", "du", "des", "d", "et", "au", "aux",
];

/// Case-folds, transliterates and splits `s` into ASCII alphanumeric tokens.
///
/// Input is decomposed and combining marks are dropped first, so NFC and NFD
/// spellings of a name fold identically. Symbols are then blanked before
/// transliteration so that marks such as `®` vanish instead of becoming `(R)`.
fn fold_tokens(s: &str) -> Vec<String> {
    let letters: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let ascii = deunicode::deunicode(&letters).to_lowercase();
    NON_ALNUM_RE
        .replace_all(&ascii, " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Normalizes a park name for comparison.
///
/// Idempotent: `normalize_name(&normalize_name(x, w), w) == normalize_name(x, w)`.
#[must_use]
pub fn normalize_name(s: &str, stopwords: &[&str]) -> String {
    let mut tokens = fold_tokens(s);
    while tokens.len() > 1 && tokens.last().is_some_and(|t| stopwords.contains(&t.as_str())) {
        tokens.pop();
    }
    tokens.join(" ")
}

/// Token set of the normalized form of `s`.
#[must_use]
pub fn token_set(s: &str, stopwords: &[&str]) -> HashSet<String> {
    normalize_name(s, stopwords)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Lower-cases `s` and collapses runs of whitespace, hyphens and underscores
/// into single spaces, so `"Europa-Park"` and `"europa park"` compare equal.
#[must_use]
pub fn separator_folded(s: &str) -> String {
    SEPARATOR_RE
        .replace_all(s.trim().to_lowercase().as_str(), " ")
        .trim()
        .to_owned()
}

/// Deterministic file-name stem for a park: `[a-z0-9-]` only, no leading,
/// trailing or repeated hyphens. Empty when the name has no alphanumerics.
#[must_use]
pub fn cache_file_key(s: &str) -> String {
    fold_tokens(s).join("-")
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

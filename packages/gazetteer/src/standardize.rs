//! Name standardization for the place indices.
//!
//! Two canonicalization functions that are never interchanged:
//! - [`standardize_title`] builds title index keys. It is close to literal:
//!   only underscores, case, whitespace runs and diacritics are folded.
//! - [`standardize`] builds name index keys. It is deliberately lossy so
//!   that "Kent County" and "Kent" land on the same key.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::{HONORIFICS, NOISE_WORDS, TYPE_WORDS};

/// Whole-word alternation over the administrative type vocabulary.
#[allow(clippy::expect_used)] // Built from a static vocabulary of plain words
static TYPE_WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&word_alternation(TYPE_WORDS.iter().copied())).expect("valid regex")
});

/// Alternation over the noise words ("of", "&").
#[allow(clippy::expect_used)] // Built from a static vocabulary of plain words
static NOISE_WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&word_alternation(NOISE_WORDS.iter().copied())).expect("valid regex")
});

/// One pattern per honorific abbreviation, paired with its expansion.
#[allow(clippy::expect_used)] // Built from a static vocabulary of plain words
static HONORIFIC_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    HONORIFICS
        .iter()
        .map(|(abbreviation, expansion)| {
            (
                Regex::new(&word_pattern(abbreviation)).expect("valid regex"),
                *expansion,
            )
        })
        .collect()
});

/// Regex for a single vocabulary entry.
///
/// Word boundaries are only asserted next to word characters, so entries
/// like "&" or "ste." still match.
fn word_pattern(word: &str) -> String {
    let mut pattern = String::new();
    if word.starts_with(|c: char| c.is_alphanumeric()) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(word));
    if word.ends_with(|c: char| c.is_alphanumeric()) {
        pattern.push_str(r"\b");
    }
    pattern
}

fn word_alternation<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let alternatives: Vec<String> = words.map(word_pattern).collect();
    format!("(?:{})", alternatives.join("|"))
}

/// Transliterate text to a normalized Latin representation.
///
/// Applies compatibility decomposition, drops combining marks and spells
/// out the Latin letters that have no decomposition (ß, æ, ø, ł, ...).
/// Capitalization is preserved.
///
/// # Examples
/// ```
/// use gazetteer::standardize::romanize;
///
/// assert_eq!(romanize("Zürich"), "Zurich");
/// assert_eq!(romanize("Łódź"), "Lodz");
/// assert_eq!(romanize("Ærøskøbing"), "AEroskobing");
/// ```
pub fn romanize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        match c {
            'ß' => out.push_str("ss"),
            'æ' => out.push_str("ae"),
            'Æ' => out.push_str("AE"),
            'œ' => out.push_str("oe"),
            'Œ' => out.push_str("OE"),
            'þ' => out.push_str("th"),
            'Þ' => out.push_str("TH"),
            'ø' => out.push('o'),
            'Ø' => out.push('O'),
            'ł' => out.push('l'),
            'Ł' => out.push('L'),
            'đ' | 'ð' => out.push('d'),
            'Đ' | 'Ð' => out.push('D'),
            'ı' => out.push('i'),
            _ => out.push(c),
        }
    }
    out
}

/// Canonical key for the title index.
///
/// Underscores become spaces, the title is romanized, whitespace runs are
/// collapsed and the result is lower-cased. Used for both insertion and
/// lookup so title lookups are case and underscore insensitive.
///
/// # Examples
/// ```
/// use gazetteer::standardize::standardize_title;
///
/// assert_eq!(standardize_title("New_York"), standardize_title("new york"));
/// assert_eq!(standardize_title("Montréal, Québec"), "montreal, quebec");
/// ```
pub fn standardize_title(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    romanize(&spaced)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Canonical key for the preferred and variant name indices.
///
/// Lower-cases, turns hyphens into spaces, expands honorifics, strips
/// administrative type words and noise words, romanizes and finally
/// removes all whitespace. When stripping leaves nothing (a place literally
/// named "County"), the unstripped name is used instead.
///
/// # Examples
/// ```
/// use gazetteer::standardize::standardize;
///
/// assert_eq!(standardize("Kent County"), "kent");
/// assert_eq!(standardize("Ste.-Marie"), standardize("Sainte Marie"));
/// assert_eq!(standardize("County"), "county");
/// ```
pub fn standardize(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('-', " ");

    let mut expanded = lowered.clone();
    for (pattern, expansion) in HONORIFIC_PATTERNS.iter() {
        let replacement = format!(" {expansion} ");
        expanded = pattern
            .replace_all(&expanded, replacement.as_str())
            .into_owned();
    }

    let stripped = TYPE_WORD_PATTERN.replace_all(&expanded, " ");
    let stripped = NOISE_WORD_PATTERN.replace_all(&stripped, " ");

    let base = if stripped.trim().is_empty() {
        lowered.as_str()
    } else {
        stripped.as_ref()
    };

    romanize(base)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

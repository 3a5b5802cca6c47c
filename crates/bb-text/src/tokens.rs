//! Tokenization and alias matching over normalized text.

use regex::Regex;
use std::sync::LazyLock;

/// Filler words ignored when counting meaningful tokens.
pub const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but", "in", "with", "to", "for",
    "of", "as", "by", "bruh", "bro", "yaar", "man",
];

/// Aliases this short only match as whole words ("cs" must not hit "physics").
/// Longer ones must still start a word ("econ" must not hit "second").
const SHORT_ALIAS_LEN: usize = 3;

static RE_SCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{2,3}\b").unwrap());

/// Lower-case whitespace tokens with surrounding punctuation trimmed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Tokens that are neither stop words nor single characters.
pub fn meaningful_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.chars().count() > 1 && !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

fn is_boundary(c: Option<char>) -> bool {
    c.map_or(true, |c| !c.is_alphanumeric())
}

/// Byte offset of the first occurrence of `alias` in `text` (both lower-case).
///
/// Aliases of three characters or fewer must be delimited by non-alphanumeric
/// characters on both sides; longer ones must begin at a word start but may
/// run into a suffix ("computer" hits "computers").
pub fn find_alias(text: &str, alias: &str) -> Option<usize> {
    find_alias_all(text, alias).into_iter().next()
}

/// `alias` occurs in `text` under the [`find_alias`] boundary rules.
pub fn contains_alias(text: &str, alias: &str) -> bool {
    find_alias(text, alias).is_some()
}

/// Every accepted occurrence of `alias`, in text order.
pub fn find_alias_all(text: &str, alias: &str) -> Vec<usize> {
    if alias.is_empty() {
        return Vec::new();
    }
    let whole_word = alias.chars().count() <= SHORT_ALIAS_LEN;
    text.match_indices(alias)
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            let before = text[..pos].chars().next_back();
            if !is_boundary(before) {
                return false;
            }
            !whole_word || is_boundary(text[pos + alias.len()..].chars().next())
        })
        .collect()
}

/// Index of the whitespace token containing byte offset `pos`.
pub fn token_index_at(text: &str, pos: usize) -> usize {
    let head = &text[..pos.min(text.len())];
    let complete = head.split_whitespace().count();
    if head.is_empty() || head.ends_with(char::is_whitespace) {
        complete
    } else {
        complete - 1
    }
}

/// First two- or three-digit number in the raw comment. No range check.
pub fn first_score(raw: &str) -> Option<u16> {
    RE_SCORE
        .find_iter(raw)
        .find_map(|m| m.as_str().parse::<u16>().ok())
}

use crate::markup::strip_markup;

/// Punctuation kept by [`normalize`]; everything else that is not
/// alphanumeric or whitespace becomes a space.
const KEPT_PUNCTUATION: &[char] = &['?', '!', '.', ',', '-'];

/// Strip markup, drop disallowed characters, collapse whitespace and trim.
///
/// Idempotent: the output contains no markup characters, so a second pass
/// has nothing left to rewrite.
pub fn normalize(raw: &str) -> String {
    let stripped = strip_markup(raw);
    let filtered: String = stripped
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c) {
                c
            } else {
                ' '
            }
        })
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalize`] followed by lower-casing, the form every classifier reads.
pub fn normalize_lower(raw: &str) -> String {
    normalize(raw).to_lowercase()
}

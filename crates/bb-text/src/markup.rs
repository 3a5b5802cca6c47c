//! Forum emphasis markup removal.

use regex::Regex;
use std::sync::LazyLock;

static RE_FENCED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(?:[A-Za-z0-9_+-]*\n)?(.*?)```").unwrap());
static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());
static RE_STRIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.*?)~~").unwrap());
static RE_SUPER_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^\(([^)]*)\)").unwrap());
static RE_SUPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^(.*?)\^").unwrap());
// Only underscores that open and close a span, so snake_case names survive.
static RE_UNDERLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|[^\w])_([^_\n]+)_([^\w]|$)").unwrap());

/// Replace emphasis markup (bold, italic, code, strikethrough, superscript,
/// underline) with its inner text.
pub fn strip_markup(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = RE_FENCED.replace_all(text, "$1").into_owned();
    result = RE_INLINE_CODE.replace_all(&result, "$1").into_owned();
    result = RE_BOLD.replace_all(&result, "$1").into_owned();
    result = RE_ITALIC.replace_all(&result, "$1").into_owned();
    result = RE_STRIKE.replace_all(&result, "$1").into_owned();
    result = RE_SUPER_PAREN.replace_all(&result, "$1").into_owned();
    result = RE_SUPER.replace_all(&result, "$1").into_owned();
    result = RE_UNDERLINE.replace_all(&result, "${1}${2}${3}").into_owned();
    result
}

//! Comment text handling: forum markup stripping, normalization and tokenization.
//!
//! Every function here is total: arbitrary Unicode input at worst reduces to
//! an empty string or an empty token list.

pub mod markup;
pub mod normalize;
pub mod tokens;

pub use markup::strip_markup;
pub use normalize::{normalize, normalize_lower};
pub use tokens::{
    contains_alias, find_alias, find_alias_all, first_score, meaningful_tokens, token_index_at, tokenize,
    STOP_WORDS,
};

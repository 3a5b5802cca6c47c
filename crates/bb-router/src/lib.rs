//! BITSAT comment router: keyword tables, intent classifiers and entity extraction.
//!
//! Classifiers are independent predicates over shared [`features::Features`];
//! [`rules::CASCADE`] fixes their priority and the first match wins.

pub mod types;
pub mod config;
pub mod extract;
pub mod features;
pub mod rules;
pub mod query;

pub use types::*;
pub use config::{default_keyword_config, KEYWORD_CONFIG};
pub use extract::{
    comparison_sides, extract_branch, extract_campus, extract_comparison_pairs, extract_score,
};
pub use query::Query;
pub use rules::{
    classify, is_admission_chance_query, is_comparison_query, is_cutoff_query,
    is_suggestion_query, is_trend_query, Classification, CASCADE,
};

/// Analyze one comment with the default keyword tables.
pub fn route(author: Option<&str>, raw: &str) -> Query {
    Query::analyze(author, raw)
}

#[cfg(test)]
mod tests;

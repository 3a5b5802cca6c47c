//! Per-comment text features computed once and shared by every classifier.

use crate::extract::{branch_mentions, campus_mentions, extract_score, has_msc_marker};
use crate::types::{BranchMention, CampusMention, KeywordConfig};
use bb_text::{contains_alias, meaningful_tokens, normalize, tokenize};

#[derive(Debug, Clone)]
pub struct Features {
    pub normalized: String,
    pub lower: String,
    pub words: Vec<String>,
    pub meaningful: Vec<String>,
    pub branches: Vec<BranchMention>,
    pub campuses: Vec<CampusMention>,
    pub score: Option<u16>,
    pub msc: bool,
    pub is_command: bool,
}

impl Features {
    pub fn from_raw(raw: &str) -> Self {
        let normalized = normalize(raw);
        let lower = normalized.to_lowercase();
        let is_command = raw.trim_start().starts_with('!') || lower.starts_with('!');
        Self {
            words: tokenize(&lower),
            meaningful: meaningful_tokens(&lower),
            branches: branch_mentions(&lower),
            campuses: campus_mentions(&lower),
            score: extract_score(raw),
            msc: has_msc_marker(&lower),
            is_command,
            normalized,
            lower,
        }
    }

    /// Any meaningful token is in `words`.
    pub fn has_word(&self, words: &[String]) -> bool {
        self.meaningful.iter().any(|t| words.contains(t))
    }

    /// Like [`Features::has_word`] but stop words count too.
    pub fn has_token(&self, words: &[String]) -> bool {
        self.words.iter().any(|t| words.contains(t))
    }

    /// Any phrase occurs in the text (short phrases as whole words).
    pub fn has_phrase(&self, phrases: &[String]) -> bool {
        phrases.iter().any(|p| contains_alias(&self.lower, p))
    }

    pub fn names_campus(&self) -> bool {
        !self.campuses.is_empty()
    }

    pub fn names_branch(&self) -> bool {
        !self.branches.is_empty()
    }

    /// A named campus or a generic campus word ("bits", "campus").
    pub fn has_campus(&self, cfg: &KeywordConfig) -> bool {
        self.names_campus() || self.has_word(&cfg.campus_words)
    }

    pub fn has_branch(&self, cfg: &KeywordConfig) -> bool {
        self.names_branch() || self.has_word(&cfg.branch_words)
    }

    pub fn is_question(&self, cfg: &KeywordConfig) -> bool {
        self.lower.contains('?')
            || self.has_word(&cfg.question_words)
            || self.has_token(&cfg.choice_words)
    }
}

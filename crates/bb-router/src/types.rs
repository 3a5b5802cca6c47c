use bb_core::{Branch, Campus};
use serde::{Deserialize, Serialize};

/// Response type chosen for a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// `!help`, `!bot`, `!ai`
    Help,
    AdmissionChance,
    Comparison,
    Trend,
    Suggestion,
    Cutoff,
    /// A `!` command nothing else could make sense of.
    Fallback,
}

/// One side of a comparison. At least one field is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub campus: Option<Campus>,
    pub branch: Option<Branch>,
}

impl Side {
    pub fn new(campus: Option<Campus>, branch: Option<Branch>) -> Self {
        Self { campus, branch }
    }

    pub fn pair(campus: Campus, branch: Branch) -> Self {
        Self { campus: Some(campus), branch: Some(branch) }
    }
}

/// Entities pulled out of one comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub campus: Option<Campus>,
    pub branch: Option<Branch>,
    pub score: Option<u16>,
    pub comparison: Option<(Side, Side)>,
}

impl Entities {
    pub fn is_empty(&self) -> bool {
        self.campus.is_none() && self.branch.is_none() && self.score.is_none() && self.comparison.is_none()
    }
}

/// A branch alias located in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchMention {
    pub branch: Branch,
    pub alias: &'static str,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampusMention {
    pub campus: Campus,
    pub alias: &'static str,
    pub pos: usize,
}

/// Keyword vocabulary shared by every classifier.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    pub cutoff_terms: Vec<String>,
    /// Generic campus words that count as a campus mention without naming one.
    pub campus_words: Vec<String>,
    /// Generic branch words that count as a branch mention without naming one.
    pub branch_words: Vec<String>,
    pub question_words: Vec<String>,
    /// Words that turn a statement into a choice question ("which", "should").
    pub choice_words: Vec<String>,
    pub context_words: Vec<String>,
    pub interrogative_phrases: Vec<String>,
    pub admission_phrases: Vec<String>,
    pub comparison_markers: Vec<String>,
    /// Only count as a comparison marker inside a question.
    pub weak_comparison_markers: Vec<String>,
    pub trend_phrases: Vec<String>,
    pub suggestion_phrases: Vec<String>,
    pub suggestion_context: Vec<String>,
    pub help_commands: Vec<String>,
    pub command_words: Vec<(String, Intent)>,
    /// Meaningful-token budget for bare "campus + branch" queries.
    pub short_query_meaningful: usize,
    /// Raw word budget for bare "campus + branch" queries.
    pub short_query_words: usize,
    /// Max token distance between a campus and its branch in a comparison pair.
    pub pair_window: usize,
}

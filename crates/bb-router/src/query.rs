use crate::config::KEYWORD_CONFIG;
use crate::extract::{comparison_sides, extract_branch, extract_campus};
use crate::features::Features;
use crate::rules::classify;
use crate::types::{Entities, Intent, KeywordConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One analyzed comment: normalized text, chosen intent and extracted entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub raw_text: String,
    pub normalized_text: String,
    pub author: Option<String>,
    /// `None` when no classifier matched and the comment is not a command.
    pub intent: Option<Intent>,
    pub entities: Entities,
    pub signals: Vec<String>,
}

impl Query {
    pub fn analyze(author: Option<&str>, raw: &str) -> Self {
        Self::analyze_with(author, raw, &KEYWORD_CONFIG)
    }

    pub fn analyze_with(author: Option<&str>, raw: &str, cfg: &KeywordConfig) -> Self {
        let features = Features::from_raw(raw);
        let classification = classify(&features, cfg);
        let entities = Entities {
            campus: extract_campus(&features.lower),
            branch: extract_branch(&features.lower),
            score: features.score,
            comparison: comparison_sides(&features.lower, cfg.pair_window),
        };

        debug!(
            intent = ?classification.intent,
            campus = ?entities.campus,
            branch = ?entities.branch,
            score = ?entities.score,
            signals = %classification.signals.join(" | "),
            "classified comment"
        );

        Self {
            raw_text: raw.to_string(),
            normalized_text: features.normalized,
            author: author.map(str::to_string),
            intent: classification.intent,
            entities,
            signals: classification.signals,
        }
    }

    pub fn is_command(&self) -> bool {
        self.raw_text.trim_start().starts_with('!') || self.normalized_text.starts_with('!')
    }

    /// Something the bot should answer.
    pub fn is_actionable(&self) -> bool {
        self.intent.is_some()
    }
}

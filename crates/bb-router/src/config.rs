//! Default keyword vocabulary, English plus the Hinglish the subreddit actually writes in.

use crate::types::*;

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn commands(items: &[(&str, Intent)]) -> Vec<(String, Intent)> {
    items.iter().map(|(w, i)| (w.to_string(), *i)).collect()
}

/// Default keyword configuration.
pub fn default_keyword_config() -> KeywordConfig {
    KeywordConfig {
        cutoff_terms: s(&[
            "cutoff", "cutoffs", "cut-off", "cut-offs", "minimum", "required", "needed",
            "admission", "qualifying", "entrance", "score", "scores", "marks", "points",
        ]),
        campus_words: s(&["bits", "campus", "campuses"]),
        branch_words: s(&["science", "computing"]),
        question_words: s(&[
            "what", "how", "tell", "show", "give", "share", "know", "kya", "kitne",
            "batao", "bata", "chahiye", "need", "want", "looking", "find",
        ]),
        choice_words: s(&["which", "should", "or", "kaunsa", "konsa"]),
        context_words: s(&["score", "marks", "needed", "require", "admission", "minimum"]),
        interrogative_phrases: s(&[
            "what is the cutoff", "what is", "tell me", "how much", "how many", "kya hai",
            "kitne marks", "batao", "cutoff for", "marks for", "score for", "needed for",
        ]),
        admission_phrases: s(&[
            "can i get", "will i get", "can i make", "will i qualify", "can i qualify",
            "do i qualify", "will i make", "chance", "chances", "possible to get",
            "is it possible", "enough for", "kya milega", "milega", "mil jayega", "mil sakta",
        ]),
        comparison_markers: s(&[
            "vs", "vs.", "versus", "compare", "comparison", "difference between",
            "diff between", "or should i take",
        ]),
        weak_comparison_markers: s(&["better", "best"]),
        trend_phrases: s(&[
            "trend", "trends", "previous year", "previous years", "last year", "last few years",
            "past years", "over years", "over the years", "year wise", "yearwise", "history",
            "historical", "pichle saal", "going up", "increase", "increasing",
        ]),
        suggestion_phrases: s(&[
            "suggest", "suggestion", "suggestions", "which branch should i", "which campus should i",
            "what should i", "should i take", "should i choose", "confused", "help me choose",
            "advice", "recommend", "what can i get", "kya lu", "kaunsa lu",
        ]),
        suggestion_context: s(&[
            "score", "scored", "marks", "branch", "branches", "campus", "campuses", "choose",
            "bitsat",
        ]),
        help_commands: s(&["help", "bot", "ai"]),
        command_words: commands(&[
            ("cutoff", Intent::Cutoff),
            ("cutoffs", Intent::Cutoff),
            ("bitsat", Intent::Cutoff),
            ("placement", Intent::Cutoff),
            ("placements", Intent::Cutoff),
            ("chance", Intent::AdmissionChance),
            ("chances", Intent::AdmissionChance),
            ("compare", Intent::Comparison),
            ("trend", Intent::Trend),
            ("trends", Intent::Trend),
            ("suggest", Intent::Suggestion),
        ]),
        short_query_meaningful: 5,
        short_query_words: 6,
        pair_window: 3,
    }
}

/// The default config instance.
pub static KEYWORD_CONFIG: std::sync::LazyLock<KeywordConfig> =
    std::sync::LazyLock::new(default_keyword_config);

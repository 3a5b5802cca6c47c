//! Intent classifiers and the priority cascade that picks one.

use crate::config::KEYWORD_CONFIG;
use crate::extract::comparison_sides;
use crate::features::Features;
use crate::types::{Intent, KeywordConfig};

/// A classifier over precomputed features.
pub type Predicate = fn(&Features, &KeywordConfig) -> bool;

/// Most specific first. Only the first match decides the response type.
pub const CASCADE: [(Intent, Predicate); 5] = [
    (Intent::AdmissionChance, admission_chance_query),
    (Intent::Comparison, comparison_query),
    (Intent::Trend, trend_query),
    (Intent::Suggestion, suggestion_query),
    (Intent::Cutoff, cutoff_query),
];

/// Classification outcome with the signals that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Option<Intent>,
    pub signals: Vec<String>,
}

/// Cutoff term with a campus or branch; a bare campus + branch inside the
/// short-query budget; or a question/interrogative phrase with a mention and
/// cutoff context.
pub fn cutoff_query(f: &Features, cfg: &KeywordConfig) -> bool {
    let campus = f.has_campus(cfg);
    let branch = f.has_branch(cfg);
    if !campus && !branch {
        return false;
    }
    let cutoff_term = f.has_word(&cfg.cutoff_terms);
    let context = f.has_word(&cfg.context_words);
    let both = campus && branch;

    cutoff_term
        || (both && f.meaningful.len() <= cfg.short_query_meaningful)
        || (both && f.words.len() <= cfg.short_query_words)
        || (both && context)
        || (f.has_word(&cfg.question_words) && context)
        || (f.has_phrase(&cfg.interrogative_phrases) && context)
}

/// Admission phrase, a mention, and a plausible score. All three required.
pub fn admission_chance_query(f: &Features, cfg: &KeywordConfig) -> bool {
    f.score.is_some()
        && (f.has_branch(cfg) || f.has_campus(cfg))
        && f.has_phrase(&cfg.admission_phrases)
}

/// A comparison marker plus two distinct branches or two distinct campuses.
/// "better"/"best" only count inside a question.
pub fn comparison_query(f: &Features, cfg: &KeywordConfig) -> bool {
    let marker = f.has_phrase(&cfg.comparison_markers)
        || (f.has_phrase(&cfg.weak_comparison_markers) && f.is_question(cfg));
    marker && (f.branches.len() >= 2 || f.campuses.len() >= 2)
}

/// Trend phrase with cutoff or branch context, never alongside a comparison marker.
pub fn trend_query(f: &Features, cfg: &KeywordConfig) -> bool {
    f.has_phrase(&cfg.trend_phrases)
        && (f.has_word(&cfg.cutoff_terms) || f.has_branch(cfg))
        && !f.has_phrase(&cfg.comparison_markers)
        && !f.has_phrase(&cfg.weak_comparison_markers)
}

/// Advice phrase plus admissions context: a score, a named branch, or an
/// admissions word. A campus name alone is travel talk, not a branch question.
pub fn suggestion_query(f: &Features, cfg: &KeywordConfig) -> bool {
    f.has_phrase(&cfg.suggestion_phrases)
        && (f.score.is_some() || f.names_branch() || f.has_token(&cfg.suggestion_context))
}

fn command_word(lower: &str) -> &str {
    lower
        .trim_start_matches(|c: char| c == '!' || c.is_whitespace())
        .split_whitespace()
        .next()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .unwrap_or("")
}

fn classify_command(f: &Features, cfg: &KeywordConfig, signals: &mut Vec<String>) -> Intent {
    let word = command_word(&f.lower);
    signals.push(format!("command=!{word}"));

    if cfg.help_commands.iter().any(|h| h == word) {
        return Intent::Help;
    }
    if let Some((_, intent)) = cfg.command_words.iter().find(|(w, _)| w == word) {
        return match intent {
            Intent::AdmissionChance if f.score.is_none() => Intent::Cutoff,
            Intent::Comparison if comparison_sides(&f.lower, cfg.pair_window).is_none() => Intent::Cutoff,
            other => *other,
        };
    }
    if f.names_branch() || f.names_campus() || f.score.is_some() {
        return CASCADE[..CASCADE.len() - 1]
            .iter()
            .find(|(_, pred)| pred(f, cfg))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Cutoff);
    }
    Intent::Fallback
}

/// Run the command check and then the cascade in priority order.
pub fn classify(f: &Features, cfg: &KeywordConfig) -> Classification {
    let mut signals = Vec::new();
    if !f.branches.is_empty() {
        let names: Vec<_> = f.branches.iter().map(|m| m.branch.key()).collect();
        signals.push(format!("branches=[{}]", names.join(", ")));
    }
    if !f.campuses.is_empty() {
        let names: Vec<_> = f.campuses.iter().map(|m| m.campus.key()).collect();
        signals.push(format!("campuses=[{}]", names.join(", ")));
    }
    if let Some(score) = f.score {
        signals.push(format!("score={score}"));
    }
    if f.msc {
        signals.push("msc".into());
    }

    if f.is_command {
        let intent = classify_command(f, cfg, &mut signals);
        return Classification { intent: Some(intent), signals };
    }

    let intent = CASCADE
        .iter()
        .find(|(_, pred)| pred(f, cfg))
        .map(|(intent, _)| *intent);
    Classification { intent, signals }
}

pub fn is_cutoff_query(raw: &str) -> bool {
    cutoff_query(&Features::from_raw(raw), &KEYWORD_CONFIG)
}

pub fn is_admission_chance_query(raw: &str) -> bool {
    admission_chance_query(&Features::from_raw(raw), &KEYWORD_CONFIG)
}

pub fn is_comparison_query(raw: &str) -> bool {
    comparison_query(&Features::from_raw(raw), &KEYWORD_CONFIG)
}

pub fn is_trend_query(raw: &str) -> bool {
    trend_query(&Features::from_raw(raw), &KEYWORD_CONFIG)
}

pub fn is_suggestion_query(raw: &str) -> bool {
    suggestion_query(&Features::from_raw(raw), &KEYWORD_CONFIG)
}

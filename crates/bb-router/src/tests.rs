use crate::*;
use crate::extract::{branch_mentions, has_msc_marker};
use crate::features::Features;
use bb_core::{Branch, Campus};

fn intent(raw: &str) -> Option<Intent> {
    route(Some("aspirant"), raw).intent
}

fn lower(raw: &str) -> String {
    bb_text::normalize_lower(raw)
}

// ========== Cutoff ==========

#[test]
fn test_cutoff_term_with_campus() {
    assert!(is_cutoff_query("Goa ECE cutoff bruh"));
    assert!(is_cutoff_query("what is the minimum for pilani"));
}

#[test]
fn test_bare_campus_branch_short_query() {
    assert!(is_cutoff_query("hyd eee?"));
    assert!(is_cutoff_query("pilani mechanical"));
}

#[test]
fn test_long_unrelated_comment_is_not_cutoff() {
    let text = "I went to goa last summer and the beaches were amazing, highly recommend";
    assert!(!is_cutoff_query(text));
    assert_eq!(intent(text), None);
}

#[test]
fn test_cutoff_needs_a_mention() {
    assert!(!is_cutoff_query("what is the cutoff"));
    assert!(!is_cutoff_query(""));
}

// ========== Admission chance ==========

#[test]
fn test_admission_needs_all_three() {
    assert!(is_admission_chance_query("can i get cse with 310"));
    assert!(!is_admission_chance_query("can i get cse"));
    assert!(!is_admission_chance_query("can i get in with 310"));
    assert!(!is_admission_chance_query("cse 310"));
}

#[test]
fn test_admission_with_campus_only() {
    assert!(is_admission_chance_query("will i get goa with 280 marks"));
}

// ========== Comparison ==========

#[test]
fn test_comparison_examples() {
    assert!(is_comparison_query("compare CSE vs ECE"));
    assert!(!is_comparison_query("ECE seems better than CSE for me"));
    assert!(!is_comparison_query("CSE"));
}

#[test]
fn test_comparison_single_branch_is_not_comparison() {
    assert!(!is_comparison_query("cse vs life"));
}

#[test]
fn test_weak_marker_inside_question() {
    assert!(is_comparison_query("which is better, ece or eee?"));
    assert!(is_comparison_query("pilani or goa, which is better"));
}

// ========== Trend ==========

#[test]
fn test_trend_query() {
    assert!(is_trend_query("cse pilani cutoff trend"));
    assert!(is_trend_query("previous years cutoffs for goa"));
    assert!(!is_trend_query("trend is my friend"));
}

#[test]
fn test_trend_excludes_comparison_marker() {
    let text = "how has CSE cutoff compared over years";
    assert!(!is_trend_query(text));
    assert_eq!(intent(text), Some(Intent::Cutoff));
}

// ========== Suggestion ==========

#[test]
fn test_suggestion_query() {
    assert!(is_suggestion_query("I scored 290, which branch should i take?"));
    assert!(is_suggestion_query("confused about which campus to choose"));
    assert!(!is_suggestion_query("confused"));
    assert!(is_suggestion_query("kaunsa lu, cse goa or ece pilani"));
}

#[test]
fn test_suggestion_ignores_everyday_advice() {
    for text in [
        "I'm so confused, did you get my message?",
        "what should i get for dinner tonight",
        "any advice on how to take notes faster",
        "I went to goa last summer and the beaches were amazing, highly recommend",
    ] {
        assert!(!is_suggestion_query(text), "{text}");
        assert_eq!(intent(text), None, "{text}");
    }
}

// ========== Cascade ==========

#[test]
fn test_cascade_priority() {
    assert_eq!(intent("can i get cse vs ece with 300"), Some(Intent::AdmissionChance));
    assert_eq!(intent("compare goa cse vs pilani ece cutoff trend"), Some(Intent::Comparison));
    assert_eq!(intent("cse cutoff trend over the years"), Some(Intent::Trend));
    assert_eq!(intent("I scored 290, which branch should i take?"), Some(Intent::Suggestion));
    assert_eq!(intent("Goa ECE cutoff bruh"), Some(Intent::Cutoff));
}

#[test]
fn test_cascade_order_is_fixed() {
    let order: Vec<Intent> = CASCADE.iter().map(|(i, _)| *i).collect();
    assert_eq!(
        order,
        vec![
            Intent::AdmissionChance,
            Intent::Comparison,
            Intent::Trend,
            Intent::Suggestion,
            Intent::Cutoff,
        ]
    );
}

#[test]
fn test_no_intent_for_noise() {
    assert_eq!(intent(""), None);
    assert_eq!(intent("💀💀💀"), None);
    assert_eq!(intent("nice weather today"), None);
}

// ========== Commands ==========

#[test]
fn test_help_commands() {
    assert_eq!(intent("!help"), Some(Intent::Help));
    assert_eq!(intent("!bot"), Some(Intent::Help));
    assert_eq!(intent("**!ai**"), Some(Intent::Help));
}

#[test]
fn test_command_words() {
    assert_eq!(intent("!cutoff"), Some(Intent::Cutoff));
    assert_eq!(intent("!trend cse"), Some(Intent::Trend));
    assert_eq!(intent("!suggest 300"), Some(Intent::Suggestion));
    assert_eq!(intent("!chance cse 300"), Some(Intent::AdmissionChance));
}

#[test]
fn test_command_words_degrade_to_cutoff() {
    assert_eq!(intent("!chance cse"), Some(Intent::Cutoff));
    assert_eq!(intent("!compare cse"), Some(Intent::Cutoff));
    assert_eq!(intent("!compare cse ece"), Some(Intent::Comparison));
}

#[test]
fn test_command_with_mentions_runs_cascade() {
    assert_eq!(intent("!goa cse"), Some(Intent::Cutoff));
    assert_eq!(intent("!goa cse vs pilani cse"), Some(Intent::Comparison));
}

#[test]
fn test_unknown_command_is_fallback() {
    assert_eq!(intent("!roast me"), Some(Intent::Fallback));
    assert_eq!(intent("!"), Some(Intent::Fallback));
}

#[test]
fn test_command_signal() {
    let q = route(Some("a"), "!help");
    assert!(q.signals.iter().any(|s| s == "command=!help"));
}

// ========== Extraction ==========

#[test]
fn test_extract_goa_ece() {
    let q = route(Some("a"), "Goa ECE cutoff bruh");
    assert_eq!(q.entities.campus, Some(Campus::Goa));
    assert_eq!(q.entities.branch, Some(Branch::Ece));
    assert_eq!(q.entities.score, None);
    assert_eq!(q.normalized_text, "Goa ECE cutoff bruh");
}

#[test]
fn test_extract_admission_entities() {
    let q = route(Some("a"), "can i get cse with 310");
    assert_eq!(q.intent, Some(Intent::AdmissionChance));
    assert_eq!(q.entities.branch, Some(Branch::Cse));
    assert_eq!(q.entities.campus, None);
    assert_eq!(q.entities.score, Some(310));
}

#[test]
fn test_longest_alias_wins() {
    assert_eq!(extract_branch(&lower("electrical and electronics at hyd")), Some(Branch::Eee));
    assert_eq!(extract_branch(&lower("electronics and instrumentation")), Some(Branch::Instrumentation));
    assert_eq!(extract_branch(&lower("chemistry")), Some(Branch::Chemistry));
    assert_eq!(extract_branch(&lower("maths")), Some(Branch::Mnc));
}

#[test]
fn test_short_alias_not_inside_words() {
    assert_eq!(extract_branch(&lower("physics")), Some(Branch::Physics));
    assert_eq!(extract_campus(&lower("hyderabad")), Some(Campus::Hyderabad));
    assert_eq!(extract_branch(&lower("second year")), None);
    assert_eq!(extract_branch(&lower("goa cutoff in second iteration")), None);
    assert_eq!(extract_branch(&lower("pilani cutoff scheme")), None);
    assert_eq!(extract_branch(&lower("the aftermath of results")), None);
    assert_eq!(extract_branch(&lower("mech at goa")), Some(Branch::Mechanical));
}

#[test]
fn test_embedded_abbreviation_does_not_pick_branch() {
    let q = route(Some("aspirant"), "goa cutoff in second iteration");
    assert_eq!(q.intent, Some(Intent::Cutoff));
    assert_eq!(q.entities.branch, None);
    assert_eq!(q.entities.campus, Some(Campus::Goa));
    let q = route(Some("aspirant"), "pilani cutoff scheme");
    assert_eq!(q.entities.branch, None);
}

#[test]
fn test_campus_canonical_order() {
    assert_eq!(extract_campus(&lower("goa or pilani")), Some(Campus::Pilani));
    assert_eq!(extract_campus(&lower("kk birla goa")), Some(Campus::Goa));
    assert_eq!(extract_campus(&lower("nothing")), None);
}

#[test]
fn test_score_scans_raw_text() {
    assert_eq!(extract_score("**310** for cse"), Some(310));
    assert_eq!(extract_score("bitsat 2024"), None);
}

// ========== MSc override ==========

#[test]
fn test_msc_markers() {
    assert!(has_msc_marker("msc eco"));
    assert!(has_msc_marker("m.sc physics"));
    assert!(has_msc_marker("m sc chem"));
    assert!(!has_msc_marker("mscx"));
}

#[test]
fn test_msc_prefers_msc_alias() {
    assert_eq!(extract_branch(&lower("msc physics goa")), Some(Branch::Physics));
    assert_eq!(extract_branch(&lower("msc maths goa")), Some(Branch::MscMathematics));
}

#[test]
fn test_msc_subject_fallback() {
    assert_eq!(extract_branch(&lower("msc eco cutoff goa")), Some(Branch::Economics));
    assert_eq!(extract_branch(&lower("m sc chem hyd")), Some(Branch::Chemistry));
    assert_eq!(extract_branch(&lower("chem hyd")), Some(Branch::Chemical));
}

#[test]
fn test_msc_remaps_mentions() {
    let mentions: Vec<Branch> = branch_mentions(&lower("msc maths vs msc physics"))
        .into_iter()
        .map(|m| m.branch)
        .collect();
    assert_eq!(mentions, vec![Branch::MscMathematics, Branch::Physics]);
}

// ========== Comparison pairs ==========

#[test]
fn test_cross_campus_pairs() {
    let (a, b) = extract_comparison_pairs(&lower("goa cse vs pilani ece"), 3).unwrap();
    assert_eq!(a, Side::pair(Campus::Goa, Branch::Cse));
    assert_eq!(b, Side::pair(Campus::Pilani, Branch::Ece));
}

#[test]
fn test_same_branch_two_campuses() {
    let (a, b) = extract_comparison_pairs(&lower("cse pilani vs cse goa"), 3).unwrap();
    assert_eq!(a, Side::pair(Campus::Pilani, Branch::Cse));
    assert_eq!(b, Side::pair(Campus::Goa, Branch::Cse));
}

#[test]
fn test_pairs_need_two() {
    assert!(extract_comparison_pairs(&lower("pilani vs goa for cse"), 3).is_none());
    assert!(extract_comparison_pairs(&lower("cse vs ece"), 3).is_none());
}

#[test]
fn test_comparison_sides_fallbacks() {
    let (a, b) = comparison_sides(&lower("compare cse vs ece"), 3).unwrap();
    assert_eq!(a, Side::new(None, Some(Branch::Cse)));
    assert_eq!(b, Side::new(None, Some(Branch::Ece)));

    let (a, b) = comparison_sides(&lower("pilani vs goa for cse"), 3).unwrap();
    assert_eq!(a, Side::pair(Campus::Pilani, Branch::Cse));
    assert_eq!(b, Side::pair(Campus::Goa, Branch::Cse));

    assert!(comparison_sides(&lower("cse"), 3).is_none());
}

// ========== Features ==========

#[test]
fn test_features_command_detection() {
    assert!(Features::from_raw("  !help").is_command);
    assert!(!Features::from_raw("help!").is_command);
}

#[test]
fn test_custom_config() {
    let mut cfg = default_keyword_config();
    cfg.help_commands.push("madad".into());
    let q = Query::analyze_with(Some("a"), "!madad", &cfg);
    assert_eq!(q.intent, Some(Intent::Help));
}

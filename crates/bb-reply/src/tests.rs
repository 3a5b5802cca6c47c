use crate::*;
use crate::templates::{CUTOFF_ENDINGS, DARK_WISDOM};
use bb_core::{Branch, Campus, Dataset};
use bb_router::{route, Intent, Query};
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn reply(raw: &str) -> String {
    compose(&route(Some("aspirant"), raw), Dataset::global(), &mut rng(7))
}

fn table_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with('|')).collect()
}

// ========== Seed ==========

#[test]
fn test_seed_is_deterministic() {
    let at = Utc.with_ymd_and_hms(2025, 5, 20, 10, 0, 0).unwrap();
    assert_eq!(derive_seed("a", "goa ece", at), derive_seed("a", "goa ece", at));
}

#[test]
fn test_seed_changes_with_time() {
    let t1 = Utc.with_ymd_and_hms(2025, 5, 20, 10, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2025, 5, 20, 10, 0, 1).unwrap();
    assert_ne!(derive_seed("a", "goa ece", t1), derive_seed("a", "goa ece", t2));
}

#[test]
fn test_compose_at_is_reproducible() {
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
    let q = route(Some("aspirant"), "Goa ECE cutoff bruh");
    assert_eq!(compose_at(&q, Dataset::global(), at), compose_at(&q, Dataset::global(), at));
}

// ========== Cutoff ==========

#[test]
fn test_goa_ece_single_row() {
    let out = reply("Goa ECE cutoff bruh");
    assert!(out.contains("| ECE | Goa | 287/390 |"));
    assert!(CUTOFF_ENDINGS.iter().any(|e| out.contains(e)));
    assert!(out.contains(CUTOFF_LINK));
}

#[test]
fn test_every_pair_shows_exact_score() {
    let data = Dataset::global();
    for campus in Campus::ALL {
        for branch in Branch::ALL {
            let out = cutoff_reply("a", Some(branch), Some(campus), data, &mut rng(1));
            match data.cutoff(campus, branch) {
                Some(score) => {
                    let row = format!("| {} | {} | {}/390 |", branch.label(), campus.name(), score);
                    assert!(out.contains(&row), "missing {row}");
                }
                None => {
                    let row = format!("| {} | {} | not offered |", branch.label(), campus.name());
                    assert!(out.contains(&row), "missing {row}");
                    assert!(out.contains("is not offered at"));
                }
            }
        }
    }
}

#[test]
fn test_not_offered_lists_alternatives() {
    let out = reply("goa civil cutoff");
    assert!(out.contains("**CIVIL** is not offered at **Goa** campus."));
    assert!(out.contains("Pilani (238/390)"));
    let line = not_offered(Branch::Civil, Campus::Goa, Dataset::global());
    assert!(line.starts_with("**CIVIL** is not offered at **Goa** campus. Available at: Pilani (238/390)"));
    assert!(line.ends_with(".\n"));
}

#[test]
fn test_branch_only_uses_dash() {
    let out = cutoff_reply("a", Some(Branch::Manufacturing), None, Dataset::global(), &mut rng(2));
    assert!(out.contains("| Pilani | 243/390 |"));
    assert!(out.contains("| Goa | - |"));
    assert!(out.contains("| Hyderabad | - |"));
}

#[test]
fn test_campus_only_grouped_by_program() {
    let out = cutoff_reply("a", None, Some(Campus::Goa), Dataset::global(), &mut rng(3));
    assert!(out.contains("**Engineering:**"));
    assert!(out.contains("**M.Sc Programs:**"));
    assert!(out.contains("**Pharmacy:**"));
    assert!(out.contains("| B.PHARM | - |"));
    assert!(out.contains("| MSC ECONOMICS | 263/390 |"));
}

#[test]
fn test_full_matrix() {
    let out = cutoff_reply("a", None, None, Dataset::global(), &mut rng(4));
    assert!(out.contains("| Branch | Pilani | Goa | Hyderabad |"));
    assert!(out.contains("| CSE | 327/390 | 301/390 | 298/390 |"));
    assert!(out.contains("| MANUFACTURING | 243/390 | - | - |"));
}

#[test]
fn test_placement_under_branch_reply() {
    let out = reply("cse pilani cutoff");
    assert!(out.contains("CSE placements:"));
    assert!(!reply("msc physics goa cutoff").contains("placements:"));
}

#[test]
fn test_msc_economics_row() {
    assert!(reply("msc eco goa cutoff").contains("| MSC ECONOMICS | Goa | 263/390 |"));
}

// ========== Admission ==========

#[test]
fn test_chance_buckets() {
    assert_eq!(Chance::from_margin(15), Chance::Excellent);
    assert_eq!(Chance::from_margin(14), Chance::VeryGood);
    assert_eq!(Chance::from_margin(3), Chance::Good);
    assert_eq!(Chance::from_margin(0), Chance::Borderline);
    assert_eq!(Chance::from_margin(-5), Chance::Risky);
    assert_eq!(Chance::from_margin(-15), Chance::Difficult);
    assert_eq!(Chance::from_margin(-16), Chance::ExtremelyDifficult);
}

#[test]
fn test_chance_is_monotonic() {
    for m in -60..60 {
        assert!(Chance::from_margin(m + 1) <= Chance::from_margin(m), "bucket got worse at {m}");
    }
}

#[test]
fn test_cse_with_310() {
    let out = reply("can i get cse with 310");
    assert!(out.contains("| CSE | Pilani | 327/390 | short by 17 | 💀 Extremely Difficult |"));
    assert!(out.contains("| CSE | Goa | 301/390 | +9 safe | 🟢 Very Good |"));
    assert!(out.contains("| CSE | Hyderabad | 298/390 | +12 safe | 🟢 Very Good |"));
    assert!(out.contains("\n**Best shot:** CSE at Hyderabad (+12 safe)\n"));
    assert!(out.contains("*Based on 2024 cutoffs; next year's can move either way.*\n"));
}

#[test]
fn test_admission_not_offered_pair() {
    let out = admission_reply("a", Some(Branch::Pharmacy), Some(Campus::Goa), Some(200), Dataset::global(), &mut rng(5));
    assert!(out.contains("not offered"));
}

#[test]
fn test_admission_out_of_range_score() {
    let out = admission_reply("a", Some(Branch::Cse), None, Some(450), Dataset::global(), &mut rng(6));
    assert!(out.contains("out of 390"));
    assert!(out.contains("+123 safe"));
}

#[test]
fn test_admission_without_score_asks_for_it() {
    let out = admission_reply("a", Some(Branch::Cse), None, None, Dataset::global(), &mut rng(6));
    assert!(out.contains("!chance"));
}

// ========== Comparison ==========

#[test]
fn test_cross_campus_comparison() {
    let out = reply("compare goa cse vs pilani ece");
    assert!(out.contains("|  | CSE @ Goa | ECE @ Pilani |"));
    assert!(out.contains("| Cutoff | 301/390 | 314/390 |"));
    assert!(out.contains("| Avg package | 30.4 LPA | 22.6 LPA |"));
    assert!(out.contains("**ECE @ Pilani** needs **13** more marks than **CSE @ Goa**"));
    assert!(out.contains("**CSE @ Goa** has the higher average package by **7.8 LPA**"));
}

#[test]
fn test_comparison_no_data_placeholder() {
    let out = reply("compare economics vs physics");
    assert!(out.contains("| Avg package | no data | no data |"));
    assert!(out.contains("no package verdict"));
}

#[test]
fn test_campus_vs_campus() {
    let out = reply("pilani vs goa");
    assert!(out.contains("| Branch | Pilani | Goa |"));
    assert!(out.contains("| CIVIL | 238/390 | - |"));
}

#[test]
fn test_comparison_without_sides_falls_back() {
    let out = comparison_reply("a", None, Dataset::global(), &mut rng(8));
    assert!(out.contains("COMPLETE CUTOFFS"));
}

// ========== Trend ==========

#[test]
fn test_cse_pilani_trend() {
    let out = trend_reply("a", Some(Branch::Cse), Some(Campus::Pilani), Dataset::global(), &mut rng(9));
    assert!(out.contains("| 2024 | 327/390 | +5 |"));
    assert!(out.contains("| 2023 | 322/390 | +2 |"));
    assert!(out.contains("| 2022 | 320/390 | - |"));
    assert!(out.contains("~332"));
    assert!(out.contains("heuristic estimate"));
    assert!(out.find("| 2024").unwrap() < out.find("| 2022").unwrap());
}

#[test]
fn test_trend_per_campus_tables() {
    let out = trend_reply("a", Some(Branch::Civil), None, Dataset::global(), &mut rng(10));
    assert!(out.contains("CIVIL @ Pilani"));
    assert!(out.contains("CIVIL @ Hyderabad"));
    assert!(!out.contains("CIVIL @ Goa"));
}

#[test]
fn test_trend_not_offered() {
    let out = trend_reply("a", Some(Branch::Manufacturing), Some(Campus::Goa), Dataset::global(), &mut rng(11));
    assert!(out.contains("is not offered at"));
}

// ========== Suggestion ==========

#[test]
fn test_tiers() {
    assert_eq!(tier_for(335).min, 330);
    assert_eq!(tier_for(300).min, 300);
    assert_eq!(tier_for(299).min, 285);
    assert_eq!(tier_for(229).min, 0);
}

#[test]
fn test_suggestion_lists_cleared_programs() {
    let out = suggestion_reply("a", None, None, Some(290), Dataset::global(), &mut rng(12));
    assert!(out.contains("Solid options"));
    assert!(out.contains("• ECE @ Goa: 287/390 (+3 safe)"));
}

#[test]
fn test_suggestion_without_score() {
    let out = suggestion_reply("a", None, None, None, Dataset::global(), &mut rng(12));
    assert!(out.contains("!suggest"));
}

// ========== Fallback & help ==========

#[test]
fn test_roast_uses_pools() {
    let words = vec!["mocks".to_string()];
    for seed in 0..20 {
        let out = roast_reply("aspirant", &words, &mut rng(seed));
        assert!(DARK_WISDOM.iter().any(|w| out.contains(w)));
    }
}

#[test]
fn test_unknown_command_gets_roast() {
    let q = route(Some("aspirant"), "!roast me");
    assert_eq!(q.intent, Some(Intent::Fallback));
    let out = compose(&q, Dataset::global(), &mut rng(13));
    assert!(DARK_WISDOM.iter().any(|w| out.contains(w)));
}

#[test]
fn test_help_lists_commands() {
    let out = reply("!help");
    assert!(out.contains("!cutoff"));
    assert!(out.contains("!chance"));
    assert!(out.contains("!suggest"));
}

#[test]
fn test_anonymous_author() {
    let q = Query::analyze(None, "!help");
    assert!(compose(&q, Dataset::global(), &mut rng(1)).starts_with("Hey bro!"));
}

// ========== Structure vs flavor ==========

#[test]
fn test_tables_independent_of_seed() {
    let comments = [
        "Goa ECE cutoff bruh",
        "can i get cse with 310",
        "compare goa cse vs pilani ece",
        "cse pilani cutoff trend",
        "I scored 290, which branch should i take?",
        "hyderabad cutoffs",
    ];
    for raw in comments {
        let q = route(Some("aspirant"), raw);
        let a = compose(&q, Dataset::global(), &mut rng(1));
        let b = compose(&q, Dataset::global(), &mut rng(99));
        assert_eq!(table_lines(&a), table_lines(&b), "tables differ for {raw:?}");
        assert!(!table_lines(&a).is_empty(), "no table for {raw:?}");
    }
}

// ========== Properties ==========

mod properties {
    use crate::admission::margin;
    use crate::Chance;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chance_never_worsens_with_margin(m in -400i32..400, step in 0i32..50) {
            prop_assert!(Chance::from_margin(m + step) <= Chance::from_margin(m));
        }

        #[test]
        fn chance_never_worsens_with_score(cutoff in 0u16..=390, a in 0u16..=999, b in 0u16..=999) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Chance::from_margin(margin(hi, cutoff)) <= Chance::from_margin(margin(lo, cutoff)));
        }
    }
}

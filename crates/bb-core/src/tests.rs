use crate::*;
use crate::config::ActiveHoursConfig;
use crate::dataset::LONG_HISTORY_MIN_POINTS;

// ========== Dataset ==========

#[test]
fn test_snapshot_scores() {
    let d = Dataset::global();
    assert_eq!(d.cutoff(Campus::Pilani, Branch::Cse), Some(327));
    assert_eq!(d.cutoff(Campus::Goa, Branch::Cse), Some(301));
    assert_eq!(d.cutoff(Campus::Hyderabad, Branch::Cse), Some(298));
    assert_eq!(d.cutoff(Campus::Goa, Branch::Ece), Some(287));
}

#[test]
fn test_not_offered_is_distinct_from_zero() {
    let d = Dataset::global();
    assert_eq!(d.cutoff(Campus::Goa, Branch::Manufacturing), None);
    assert_eq!(d.cutoff(Campus::Hyderabad, Branch::Manufacturing), None);
    assert!(d.is_offered(Campus::Pilani, Branch::Manufacturing));
    assert!(!d.is_offered(Campus::Goa, Branch::Pharmacy));
}

#[test]
fn test_scores_within_range() {
    for (_, _, score) in Dataset::global().ranked() {
        assert!(score <= MAX_SCORE);
    }
}

#[test]
fn test_every_branch_offered_somewhere() {
    let d = Dataset::global();
    for b in Branch::ALL {
        assert!(!d.campuses_for(b).is_empty(), "{b:?} is offered nowhere");
    }
}

#[test]
fn test_ranked_is_descending() {
    let ranked = Dataset::global().ranked();
    assert_eq!(ranked[0], (Campus::Pilani, Branch::Cse, 327));
    assert!(ranked.windows(2).all(|w| w[0].2 >= w[1].2));
}

#[test]
fn test_branches_at_of_type() {
    let d = Dataset::global();
    let msc = d.branches_at_of_type(Campus::Goa, ProgramType::Msc);
    assert_eq!(msc.len(), 5);
    assert!(d.branches_at_of_type(Campus::Goa, ProgramType::Pharmacy).is_empty());
}

#[test]
fn test_latest_trend_matches_snapshot() {
    let d = Dataset::global();
    for (campus, branch, score) in d.ranked() {
        let series = d.trend(branch, campus).expect("trend for every offered pair");
        assert_eq!(series.latest(), Some((2024, score)));
    }
}

#[test]
fn test_sparse_placements() {
    let d = Dataset::global();
    assert!(d.placement(Branch::Cse).is_some());
    assert!(d.placement(Branch::Economics).is_none());
}

// ========== Trend series ==========

#[test]
fn test_cse_pilani_prediction() {
    let series = Dataset::global().trend(Branch::Cse, Campus::Pilani).unwrap();
    assert_eq!(series.last_delta(), Some(5));
    let p = series.predict_next().unwrap();
    assert_eq!(p.year, 2025);
    assert_eq!(p.score, 332);
    assert_eq!(p.method, PredictionMethod::LastDelta);
}

#[test]
fn test_missing_year_skipped() {
    let series = Dataset::global().trend(Branch::Civil, Campus::Hyderabad).unwrap();
    let points = series.year_points();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], YearPoint { year: 2023, score: 229, delta: None });
    assert_eq!(points[1].delta, Some(6));
}

#[test]
fn test_long_history_uses_average_slope() {
    let series = TrendSeries::from_points([
        (2021, Some(300)),
        (2022, Some(310)),
        (2023, Some(306)),
        (2024, Some(312)),
    ]);
    assert!(series.valid().len() >= LONG_HISTORY_MIN_POINTS);
    let p = series.predict_next().unwrap();
    assert_eq!(p.method, PredictionMethod::AverageSlope);
    assert_eq!(p.score, 316);
}

#[test]
fn test_single_point_has_no_prediction() {
    let series = TrendSeries::from_points([(2023, None), (2024, Some(250))]);
    assert_eq!(series.predict_next(), None);
    assert_eq!(series.last_delta(), None);
}

// ========== Catalog ==========

#[test]
fn test_fifteen_branches_three_programs() {
    assert_eq!(Branch::ALL.len(), 15);
    let msc = Branch::ALL.iter().filter(|b| b.program_type() == ProgramType::Msc).count();
    assert_eq!(msc, 5);
    assert_eq!(Branch::Pharmacy.program_type(), ProgramType::Pharmacy);
}

#[test]
fn test_msc_subject_table() {
    assert_eq!(Branch::msc_subject("eco"), Some(Branch::Economics));
    assert_eq!(Branch::msc_subject("maths"), Some(Branch::MscMathematics));
    assert_eq!(Branch::msc_subject("cse"), None);
}

// ========== Config ==========

#[test]
fn test_active_hours_wraps_midnight() {
    let hours = BotConfig::default().active_hours;
    assert!(hours.contains(9));
    assert!(hours.contains(23));
    assert!(hours.contains(0));
    assert!(!hours.contains(1));
    assert!(!hours.contains(8));
}

#[test]
fn test_active_hours_same_day_window() {
    let hours = ActiveHoursConfig { start_hour: 10, end_hour: 18 };
    assert!(hours.contains(10));
    assert!(!hours.contains(18));
    assert!(!hours.contains(3));
}

#[test]
fn test_config_from_lookup() {
    let config = BotConfig::from_lookup(|key| match key {
        "REDDIT_USERNAME" => Some("cutoff_oracle".into()),
        "BITSAT_ACTIVE_START" => Some("8".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.username, "cutoff_oracle");
    assert_eq!(config.active_hours.start_hour, 8);
    assert_eq!(config.subreddit, "bitsatards");
}

#[test]
fn test_config_rejects_bad_hour() {
    let err = BotConfig::from_lookup(|key| (key == "BITSAT_ACTIVE_END").then(|| "25".to_string()));
    assert!(matches!(err, Err(BotError::Config(_))));
}

#[test]
fn test_config_partial_json() {
    let config = BotConfig::from_json_str(r#"{"username": "x_helper", "reply_delay": {"min_secs": 1, "max_secs": 2}}"#).unwrap();
    assert_eq!(config.username, "x_helper");
    assert_eq!(config.reply_delay.max_secs, 2);
    assert_eq!(config.retry.restart_delay_secs, 30);
}

#[test]
fn test_config_rejects_inverted_delay() {
    let err = BotConfig::from_json_str(r#"{"reply_delay": {"min_secs": 9, "max_secs": 2}}"#);
    assert!(matches!(err, Err(BotError::Config(_))));
}

#[test]
fn test_deny_list() {
    let config = BotConfig::default();
    assert!(config.is_denied_author("AutoModerator"));
    assert!(config.is_denied_author("RemindMeBot"));
    assert!(!config.is_denied_author("aspirant_2025"));
}

// ========== Types ==========

#[test]
fn test_stream_item_defaults_from_json() {
    let item: StreamItem = serde_json::from_str(r#"{"id": "c1", "body": "hi"}"#).unwrap();
    assert_eq!(item.author, None);
    assert!(item.status().accepts_replies());
    assert!(!StreamItem::new("c2", Some("a"), "x").locked().status().accepts_replies());
}

#[test]
fn test_transient_errors() {
    assert!(BotError::Forum("timeout".into()).is_transient());
    assert!(!BotError::Auth("bad password".into()).is_transient());
}

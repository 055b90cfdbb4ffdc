//! Integration tests for fortune-core
//!
//! These tests exercise the full load → analyze workflow on realistic histories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fortune_core::{
    analytics::{
        analyze, correlation, detect_patterns, generate_predictions, score, PatternType, Period,
        TrendDirection,
    },
    parse_csv, parse_json, History, Reading,
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

/// Ten readings roughly a week apart, alternating good and bad news
fn ten_week_history() -> Vec<Reading> {
    let jitter_hours = [0, 3, -2, 1, 0, -4, 2, 0, -1, 3];
    (0..10)
        .map(|i| {
            let timestamp =
                start() + Duration::days(i * 7) + Duration::hours(jitter_hours[i as usize]);
            let (reading_type, text) = if i % 2 == 0 {
                ("tarot", "恋愛運 上昇、仕事も好調です")
            } else {
                ("horoscope", "恋愛運 停滞、仕事は不調")
            };
            Reading::new(reading_type, timestamp, text)
        })
        .collect()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_ten_week_scenario() {
    let history = ten_week_history();
    let now = start() + Duration::days(70);

    let result = analyze(&history, now);

    let weekly = result
        .trends
        .iter()
        .find(|t| t.period == Period::Weekly)
        .expect("weekly trend");
    assert!(weekly.confidence >= 0.0 && weekly.confidence <= 1.0);

    let cycle = result
        .patterns
        .iter()
        .find(|p| p.pattern_type == PatternType::Cyclical)
        .expect("cyclical pattern");
    assert_eq!(cycle.frequency, 7);
    assert!(cycle.significance > 0.9);

    let trend_predictions = result
        .predictions
        .iter()
        .filter(|p| p.aspect == "overall fortune")
        .count();
    assert_eq!(trend_predictions, 1);
}

#[test]
fn test_ten_week_scenario_details() {
    let history = ten_week_history();
    let result = analyze(&history, start() + Duration::days(70));

    // Only the reading at day 63 falls in the daily window
    assert!(result.trends.iter().all(|t| t.period != Period::Daily));

    // tarot/horoscope alternate, so every adjacency appears 4 or 5 times
    let combinations: Vec<u32> = result
        .patterns
        .iter()
        .filter(|p| p.pattern_type == PatternType::Combination)
        .map(|p| p.frequency)
        .collect();
    assert_eq!(combinations, vec![5, 4]);

    // Positive and negative keywords never co-occur
    assert!(result
        .correlations
        .iter()
        .any(|c| c.factors.contains(&"上昇".to_string()) && c.strength < -0.99));

    let cyclical = result
        .predictions
        .iter()
        .find(|p| p.aspect == "cyclical change")
        .expect("cyclical prediction");
    assert_eq!(cyclical.timeframe, "7 days from now");
}

#[test]
fn test_empty_and_single_histories() {
    let now = start();
    for history in [vec![], vec![Reading::new("tarot", now, "幸運と成功")]] {
        let result = analyze(&history, now);
        assert!(result.trends.is_empty());
        assert!(result.patterns.is_empty());
        assert!(result.correlations.is_empty());
        assert!(result.predictions.is_empty());
    }
}

#[test]
fn test_determinism_with_fixed_clock() {
    let history = ten_week_history();
    let now = start() + Duration::days(70);

    let first = serde_json::to_string(&analyze(&history, now)).unwrap();
    let second = serde_json::to_string(&analyze(&history, now)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sentiment_examples() {
    assert_eq!(score("幸運と成功"), 2);
    assert_eq!(score("不運と失敗"), -2);
    assert_eq!(score(""), 0);
}

#[test]
fn test_trend_boundaries_through_analyze() {
    let now = start() + Duration::days(1);
    let build = |texts: &[&str]| -> Vec<Reading> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Reading::new("tarot", start() + Duration::hours(i as i64), *t))
            .collect()
    };

    // scores [-1, 0, 1, 1, 1]: recent mean beats overall by 0.6
    let up = analyze(&build(&["不運", "普通", "幸運", "幸運", "幸運"]), now);
    assert_eq!(up.trends[0].trend, TrendDirection::Up);

    // scores [0, 0, 1, 1, 1]: recent mean beats overall by 0.4
    let stable = analyze(&build(&["普通", "普通", "幸運", "幸運", "幸運"]), now);
    assert_eq!(stable.trends[0].trend, TrendDirection::Stable);

    // constant scores: full confidence
    let flat = analyze(&build(&["幸運"; 5]), now);
    assert_eq!(flat.trends[0].confidence, 1.0);

    // scores [-4, 4]: variance 16
    let spread = analyze(&build(&["不運 不調 失敗 悪化", "幸運 成功 好調 向上"]), now);
    assert_eq!(spread.trends[0].confidence, 0.0);
}

#[test]
fn test_weekly_cycle_exact() {
    let history: Vec<Reading> = (0..5)
        .map(|i| Reading::new("tarot", start() + Duration::days(i * 7), "普通"))
        .collect();

    let cycles: Vec<_> = detect_patterns(&history)
        .into_iter()
        .filter(|p| p.pattern_type == PatternType::Cyclical)
        .collect();

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].frequency, 7);
    assert_eq!(cycles[0].significance, 1.0);
}

#[test]
fn test_combination_threshold() {
    let types = ["tarot", "tarot", "palm", "tarot", "palm"];
    let history: Vec<Reading> = types
        .iter()
        .enumerate()
        .map(|(i, t)| Reading::new(*t, start() + Duration::days(i as i64), ""))
        .collect();

    let combos: Vec<_> = detect_patterns(&history)
        .into_iter()
        .filter(|p| p.pattern_type == PatternType::Combination)
        .collect();

    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].frequency, 2);
    assert!(combos[0].description.contains("tarot-palm"));
}

#[test]
fn test_correlation_properties() {
    let a = [1.0, 3.0, -2.0, 0.0, 5.0];
    let b = [2.0, -1.0, 0.0, 4.0, 1.0];

    assert_eq!(correlation(&a, &b), correlation(&b, &a));
    assert!((correlation(&a, &a) - 1.0).abs() < 1e-12);
}

#[test]
fn test_predictions_from_short_history() {
    let history: Vec<Reading> = (0..2)
        .map(|i| Reading::new("tarot", start() + Duration::days(i), "幸運"))
        .collect();
    assert!(generate_predictions(&history).is_empty());
}

// =============================================================================
// Import Integration Tests
// =============================================================================

#[test]
fn test_json_import_then_analyze() {
    let json = r#"[
        {"type": "tarot", "timestamp": "2024-01-01T09:00:00Z", "text": "金運 上昇"},
        {"type": "palm", "timestamp": "2024-01-08T09:00:00Z", "text": "金運 停滞"},
        {"type": "tarot", "timestamp": "2024-01-15T09:00:00Z", "text": "金運 上昇"},
        {"type": "palm", "timestamp": "2024-01-22T09:00:00Z", "text": "金運 停滞"}
    ]"#;

    let history = parse_json(json.as_bytes()).unwrap();
    let result = analyze(history.readings(), start() + Duration::days(25));

    assert!(!result.trends.is_empty());
    assert_eq!(result.patterns[0].pattern_type, PatternType::Cyclical);
    assert_eq!(result.patterns[0].frequency, 7);
}

#[test]
fn test_csv_import_sorted_before_analysis() {
    let csv = "type,date,result\n\
               tarot,2024-01-15,幸運 成功\n\
               tarot,2024-01-01,不運 失敗\n\
               tarot,2024-01-22,幸運 成功\n\
               tarot,2024-01-08,普通\n";

    let history: History = parse_csv(csv.as_bytes()).unwrap();
    assert!(!history.is_chronological());

    let sorted = history.sorted();
    let result = analyze(sorted.readings(), start() + Duration::days(25));

    assert_eq!(result.patterns[0].pattern_type, PatternType::Cyclical);
    assert_eq!(result.predictions[0].basis[1], "upward trend");
}

#[test]
fn test_report_json_shape() {
    let history = ten_week_history();
    let value = serde_json::to_value(analyze(&history, start() + Duration::days(70))).unwrap();

    for key in ["trends", "patterns", "correlations", "predictions"] {
        assert!(value[key].is_array(), "missing {}", key);
    }
    assert_eq!(value["patterns"][0]["type"], "cyclical");
    assert_eq!(value["trends"][0]["period"], "weekly");
}

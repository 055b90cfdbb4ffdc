//! Lookback window filtering

use chrono::{DateTime, Duration, Utc};

use crate::models::Reading;

use super::types::Period;

/// Readings at or after `now - period.lookback_days()`, in original order
pub fn filter_by_period(history: &[Reading], period: Period, now: DateTime<Utc>) -> Vec<&Reading> {
    let threshold = now - Duration::days(period.lookback_days());
    history.iter().filter(|r| r.timestamp >= threshold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64, text: &str) -> Reading {
        Reading::new("tarot", now() - Duration::days(days), text)
    }

    #[test]
    fn test_filter_by_period_windows() {
        let history = vec![
            days_ago(100, "a"),
            days_ago(60, "b"),
            days_ago(20, "c"),
            days_ago(3, "d"),
        ];

        let texts = |p| -> Vec<String> {
            filter_by_period(&history, p, now())
                .iter()
                .map(|r| r.text.clone())
                .collect()
        };

        assert_eq!(texts(Period::Daily), vec!["d"]);
        assert_eq!(texts(Period::Weekly), vec!["c", "d"]);
        assert_eq!(texts(Period::Monthly), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_filter_by_period_boundary_inclusive() {
        let history = vec![days_ago(7, "edge"), days_ago(8, "outside")];
        let window = filter_by_period(&history, Period::Daily, now());

        assert_eq!(window.len(), 1);
        assert_eq!(window[0].text, "edge");
    }

    #[test]
    fn test_filter_by_period_preserves_order() {
        // Unsorted input stays unsorted
        let history = vec![days_ago(1, "x"), days_ago(5, "y"), days_ago(2, "z")];
        let window = filter_by_period(&history, Period::Daily, now());
        let texts: Vec<&str> = window.iter().map(|r| r.text.as_str()).collect();

        assert_eq!(texts, vec!["x", "y", "z"]);
    }
}

//! Sentiment trend per lookback window

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::Reading;

use super::keywords::extract_keywords;
use super::period::filter_by_period;
use super::sentiment::score_readings;
use super::stats::{mean, population_variance};
use super::types::{Period, Trend, TrendDirection};

/// How far the recent average must move past the overall average
pub const DIRECTION_MARGIN: f64 = 0.5;

/// Number of trailing scores treated as "recent"
pub const RECENT_WINDOW: usize = 3;

/// Variance at which confidence bottoms out at zero
pub const CONFIDENCE_VARIANCE_SCALE: f64 = 10.0;

/// Minimum readings in a window to report a trend
pub const MIN_TREND_READINGS: usize = 2;

/// Classify recent scores against the overall average
pub fn direction(scores: &[f64]) -> TrendDirection {
    if scores.is_empty() {
        return TrendDirection::Stable;
    }

    let average = mean(scores);
    let recent = &scores[scores.len().saturating_sub(RECENT_WINDOW)..];
    let recent_average = mean(recent);

    if recent_average > average + DIRECTION_MARGIN {
        TrendDirection::Up
    } else if recent_average < average - DIRECTION_MARGIN {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

/// Confidence in [0, 1], inversely related to score variance
pub fn confidence(scores: &[f64]) -> f64 {
    (1.0 - population_variance(scores) / CONFIDENCE_VARIANCE_SCALE).clamp(0.0, 1.0)
}

/// Trend for one window, or `None` when it holds fewer than two readings
pub fn analyze_trend(history: &[Reading], period: Period, now: DateTime<Utc>) -> Option<Trend> {
    let window = filter_by_period(history, period, now);
    if window.len() < MIN_TREND_READINGS {
        debug!(
            period = period.as_str(),
            readings = window.len(),
            "Not enough readings for trend"
        );
        return None;
    }

    let scores = score_readings(window.iter().copied());
    let trend = Trend {
        period,
        trend: direction(&scores),
        confidence: confidence(&scores),
        keywords: extract_keywords(window.iter().copied()),
    };

    debug!(
        period = period.as_str(),
        readings = window.len(),
        direction = trend.trend.as_str(),
        confidence = trend.confidence,
        "Trend analyzed"
    );
    Some(trend)
}

/// Trends for every period that has enough data, daily first
pub fn analyze_trends(history: &[Reading], now: DateTime<Utc>) -> Vec<Trend> {
    Period::all()
        .iter()
        .filter_map(|&period| analyze_trend(history, period, now))
        .collect()
}

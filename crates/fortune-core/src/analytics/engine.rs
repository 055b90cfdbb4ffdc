//! Analysis orchestrator - runs every stage over a history

use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::Reading;

use super::correlation::analyze_correlations;
use super::patterns::detect_patterns;
use super::prediction::predictions_from_patterns;
use super::trend::analyze_trends;
use super::types::AnalysisResult;

/// Analyze a chronological history as of `now`
///
/// `now` only anchors the trend lookback windows. The history is read, never
/// modified, and the same inputs always produce the same report.
pub fn analyze(history: &[Reading], now: DateTime<Utc>) -> AnalysisResult {
    let trends = analyze_trends(history, now);
    let patterns = detect_patterns(history);
    let correlations = analyze_correlations(history);
    let predictions = predictions_from_patterns(history, &patterns);

    info!(
        readings = history.len(),
        trends = trends.len(),
        patterns = patterns.len(),
        correlations = correlations.len(),
        predictions = predictions.len(),
        "History analysis complete"
    );

    AnalysisResult {
        trends,
        patterns,
        correlations,
        predictions,
    }
}

/// [`analyze`] against the current wall clock
pub fn analyze_now(history: &[Reading]) -> AnalysisResult {
    analyze(history, Utc::now())
}

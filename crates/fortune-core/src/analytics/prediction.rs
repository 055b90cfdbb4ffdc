//! Forward-looking predictions from recent trend and detected cycles

use tracing::debug;

use crate::models::Reading;

use super::patterns::{detect_patterns, REGULARITY_THRESHOLD};
use super::sentiment::score_readings;
use super::trend::{confidence, direction};
use super::types::{Pattern, PatternType, Prediction};

/// Number of trailing readings used for the trend prediction
pub const PREDICTION_WINDOW: usize = 5;

/// Fewer trailing readings than this yields no trend prediction
pub const MIN_PREDICTION_READINGS: usize = 3;

/// Trend-based prediction followed by one prediction per strong cycle
pub fn generate_predictions(history: &[Reading]) -> Vec<Prediction> {
    predictions_from_patterns(history, &detect_patterns(history))
}

/// Same as [`generate_predictions`] reusing already detected patterns
pub fn predictions_from_patterns(history: &[Reading], patterns: &[Pattern]) -> Vec<Prediction> {
    let mut predictions: Vec<Prediction> = trend_prediction(history).into_iter().collect();
    predictions.extend(cyclical_predictions(patterns));

    debug!(predictions = predictions.len(), "Predictions generated");
    predictions
}

/// Overall outlook from the last few readings, regardless of their dates
pub fn trend_prediction(history: &[Reading]) -> Option<Prediction> {
    let recent = &history[history.len().saturating_sub(PREDICTION_WINDOW)..];
    if recent.len() < MIN_PREDICTION_READINGS {
        return None;
    }

    let scores = score_readings(recent);
    Some(Prediction {
        aspect: "overall fortune".to_string(),
        likelihood: confidence(&scores),
        timeframe: "within one week".to_string(),
        basis: vec![
            "recent trend analysis".to_string(),
            direction(&scores).label().to_string(),
        ],
    })
}

/// One prediction per cyclical pattern above the regularity threshold
pub fn cyclical_predictions(patterns: &[Pattern]) -> Vec<Prediction> {
    patterns
        .iter()
        .filter(|p| p.pattern_type == PatternType::Cyclical && p.significance > REGULARITY_THRESHOLD)
        .map(|p| Prediction {
            aspect: "cyclical change".to_string(),
            likelihood: p.significance,
            timeframe: format!("{} days from now", p.frequency),
            basis: vec![
                "cyclical pattern".to_string(),
                format!("{}-day regularity", p.frequency),
            ],
        })
        .collect()
}

//! Pairwise correlations between reading types and between keywords

use tracing::debug;

use crate::models::{distinct_types, Reading};

use super::keywords::extract_keywords;
use super::sentiment::score_readings;
use super::stats::correlation;
use super::types::Correlation;

/// Correlations at or below this magnitude are not reported
pub const CORRELATION_THRESHOLD: f64 = 0.5;

/// Magnitude above which a correlation is described as strong
pub const STRONG_CORRELATION: f64 = 0.8;

/// Type-pair correlations followed by keyword-pair correlations
pub fn analyze_correlations(history: &[Reading]) -> Vec<Correlation> {
    let mut correlations = type_correlations(history);
    correlations.extend(keyword_correlations(history));

    debug!(
        readings = history.len(),
        correlations = correlations.len(),
        "Correlation analysis complete"
    );
    correlations
}

/// Correlate the sentiment sequences of each pair of reading types
///
/// Each type's sequence holds the scores of its own readings in history order;
/// sequences of different lengths are compared over their common prefix.
pub fn type_correlations(history: &[Reading]) -> Vec<Correlation> {
    let types = distinct_types(history);
    let scores_for = |t: &str| score_readings(history.iter().filter(|r| r.reading_type == t));

    let mut correlations = Vec::new();
    for &first in &types {
        for &second in &types {
            if first >= second {
                continue;
            }

            let strength = correlation(&scores_for(first), &scores_for(second));
            if strength.abs() > CORRELATION_THRESHOLD {
                correlations.push(Correlation {
                    factors: [first.to_string(), second.to_string()],
                    strength,
                    description: describe_correlation(first, second, strength),
                });
            }
        }
    }
    correlations
}

/// Correlate keyword presence across the whole history
pub fn keyword_correlations(history: &[Reading]) -> Vec<Correlation> {
    let keywords = extract_keywords(history);
    let presence: Vec<Vec<f64>> = keywords
        .iter()
        .map(|k| {
            history
                .iter()
                .map(|r| if r.text.contains(k.as_str()) { 1.0 } else { 0.0 })
                .collect()
        })
        .collect();

    let mut correlations = Vec::new();
    for i in 0..keywords.len() {
        for j in (i + 1)..keywords.len() {
            let strength = correlation(&presence[i], &presence[j]);
            if strength.abs() > CORRELATION_THRESHOLD {
                correlations.push(Correlation {
                    factors: [keywords[i].clone(), keywords[j].clone()],
                    strength,
                    description: format!(
                        "Keywords \"{}\" and \"{}\" show a {} correlation",
                        keywords[i],
                        keywords[j],
                        polarity(strength)
                    ),
                });
            }
        }
    }
    correlations
}

/// Natural-language summary of a type-pair correlation
pub fn describe_correlation(first: &str, second: &str, strength: f64) -> String {
    let magnitude = if strength.abs() > STRONG_CORRELATION {
        "strong"
    } else {
        "moderate"
    };
    format!(
        "{} and {} show a {} {} correlation",
        first,
        second,
        magnitude,
        polarity(strength)
    )
}

fn polarity(strength: f64) -> &'static str {
    if strength > 0.0 {
        "positive"
    } else {
        "negative"
    }
}

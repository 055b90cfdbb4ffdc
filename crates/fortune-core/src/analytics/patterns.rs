//! Recurring pattern detection
//!
//! Three families are reported, in this order:
//! - Cyclical: readings recur at a regular interval
//! - Keyword: words shared by consecutive readings
//! - Combination: one reading type repeatedly followed by another

use std::collections::HashSet;

use tracing::debug;

use crate::models::Reading;

use super::keywords::{is_candidate, MIN_KEYWORD_SHARE};
use super::sentiment::tokenize;
use super::stats::{mean, population_variance};
use super::tally::Tally;
use super::types::{Pattern, PatternType};

/// Regularity above which a cycle is reported
pub const REGULARITY_THRESHOLD: f64 = 0.7;

/// Minimum occurrences of a type pair to report a combination
pub const MIN_COMBINATION_COUNT: usize = 2;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// All pattern families, cyclical first
pub fn detect_patterns(history: &[Reading]) -> Vec<Pattern> {
    let mut patterns: Vec<Pattern> = detect_cyclical_pattern(history).into_iter().collect();
    patterns.extend(detect_keyword_patterns(history));
    patterns.extend(detect_combination_patterns(history));

    debug!(
        readings = history.len(),
        patterns = patterns.len(),
        "Pattern detection complete"
    );
    patterns
}

/// Regular spacing between consecutive readings
///
/// Regularity is `1 - min(1, variance / mean²)` over the intervals, so evenly
/// spaced readings score 1.0. Needs at least two intervals.
pub fn detect_cyclical_pattern(history: &[Reading]) -> Option<Pattern> {
    let intervals: Vec<f64> = history
        .windows(2)
        .map(|pair| (pair[1].timestamp - pair[0].timestamp).num_milliseconds() as f64)
        .collect();
    if intervals.len() < 2 {
        return None;
    }

    let average = mean(&intervals);
    if average <= 0.0 {
        return None;
    }
    let variance = population_variance(&intervals);
    let regularity = 1.0 - (variance / (average * average)).min(1.0);
    if regularity <= REGULARITY_THRESHOLD {
        return None;
    }

    let days = (average / MILLIS_PER_DAY).round() as u32;
    Some(Pattern {
        pattern_type: PatternType::Cyclical,
        description: format!("Readings recur roughly every {} days", days),
        frequency: days,
        significance: regularity,
    })
}

/// Words that carry over from one reading to the next
///
/// Each adjacent pair contributes at most once per shared word.
pub fn detect_keyword_patterns(history: &[Reading]) -> Vec<Pattern> {
    let mut shared = Tally::new();

    for pair in history.windows(2) {
        let current: HashSet<&str> = tokenize(&pair[1].text).collect();
        let mut seen: HashSet<&str> = HashSet::new();
        for token in tokenize(&pair[0].text) {
            if is_candidate(token) && current.contains(token) && seen.insert(token) {
                shared.add(token);
            }
        }
    }

    let reading_count = history.len() as f64;
    shared
        .iter()
        .filter(|(_, count)| *count as f64 >= MIN_KEYWORD_SHARE * reading_count)
        .map(|(word, count)| Pattern {
            pattern_type: PatternType::Keyword,
            description: format!("Keyword \"{}\" keeps appearing in consecutive readings", word),
            frequency: count as u32,
            significance: count as f64 / reading_count,
        })
        .collect()
}

/// Reading types that repeatedly follow one another
pub fn detect_combination_patterns(history: &[Reading]) -> Vec<Pattern> {
    let mut combinations = Tally::new();
    for pair in history.windows(2) {
        combinations.add((pair[0].reading_type.as_str(), pair[1].reading_type.as_str()));
    }

    let pair_count = history.len().saturating_sub(1) as f64;
    combinations
        .iter()
        .filter(|(_, count)| *count >= MIN_COMBINATION_COUNT)
        .map(|((first, second), count)| Pattern {
            pattern_type: PatternType::Combination,
            description: format!("{} is often followed by {} ({}-{})", first, second, first, second),
            frequency: count as u32,
            significance: count as f64 / pair_count,
        })
        .collect()
}

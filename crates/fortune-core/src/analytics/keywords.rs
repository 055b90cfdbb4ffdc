//! Frequency-based keyword extraction shared by trends and correlations

use crate::models::Reading;

use super::sentiment::tokenize;
use super::tally::Tally;

/// Filler words never reported as keywords
pub const STOP_WORDS: &[&str] = &["です", "ます", "した", "から", "など", "という"];

/// Maximum number of keywords returned
pub const MAX_KEYWORDS: usize = 5;

/// A word must occur at least this many times per reading to qualify
pub const MIN_KEYWORD_SHARE: f64 = 0.3;

/// Single-character tokens carry too little meaning to count
pub(crate) fn is_candidate(token: &str) -> bool {
    token.chars().count() > 1
}

/// Up to [`MAX_KEYWORDS`] frequent words across the readings, most frequent first
///
/// Every occurrence counts, so a word repeated inside one reading weighs more.
pub fn extract_keywords<'a, I>(readings: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Reading>,
{
    let mut tally = Tally::new();
    let mut reading_count = 0usize;

    for reading in readings {
        reading_count += 1;
        for token in tokenize(&reading.text) {
            if is_candidate(token) && !STOP_WORDS.contains(&token) {
                tally.add(token);
            }
        }
    }

    let min_count = MIN_KEYWORD_SHARE * reading_count as f64;
    tally
        .ranked()
        .into_iter()
        .filter(|(_, count)| *count as f64 >= min_count)
        .take(MAX_KEYWORDS)
        .map(|(token, _)| token.to_string())
        .collect()
}

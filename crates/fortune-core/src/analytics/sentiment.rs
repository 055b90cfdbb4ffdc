//! Bag-of-words sentiment scoring
//!
//! Text is split on whitespace, commas and Japanese/ASCII sentence punctuation. Every
//! positive word found inside a token adds one point and every negative word
//! subtracts one; there is no normalization and no morphological analysis.

use crate::models::Reading;

/// Words that push a reading's score up
pub const POSITIVE_WORDS: &[&str] = &["上昇", "好調", "幸運", "成功", "発展", "向上", "良い"];

/// Words that push a reading's score down
pub const NEGATIVE_WORDS: &[&str] = &["下降", "不調", "不運", "失敗", "停滞", "悪化", "悪い"];

/// Token separators in addition to whitespace
const SEPARATORS: &[char] = &['、', '。', '，', ',', '！', '？', '!', '?'];

/// Split text into non-empty tokens
///
/// Runs of separators collapse, so no empty tokens are produced.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .filter(|token| !token.is_empty())
}

/// Integer polarity of a text
pub fn score(text: &str) -> i32 {
    tokenize(text).map(score_token).sum()
}

/// Scores for each reading, in order
pub fn score_readings<'a, I>(readings: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Reading>,
{
    readings
        .into_iter()
        .map(|r| f64::from(score(&r.text)))
        .collect()
}

fn score_token(token: &str) -> i32 {
    let positive = POSITIVE_WORDS.iter().filter(|w| token.contains(*w)).count() as i32;
    let negative = NEGATIVE_WORDS.iter().filter(|w| token.contains(*w)).count() as i32;
    positive - negative
}

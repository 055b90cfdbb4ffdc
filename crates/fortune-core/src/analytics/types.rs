//! Report types produced by the analytics engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lookback window used for trend analysis
///
/// These are windows ending at "now", not calendar buckets: `Daily` covers the
/// last 7 days of readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// Number of days the window reaches back from now
    pub fn lookback_days(&self) -> i64 {
        match self {
            Period::Daily => 7,
            Period::Weekly => 30,
            Period::Monthly => 90,
        }
    }

    /// All periods in report order
    pub fn all() -> &'static [Period] {
        &[Period::Daily, Period::Weekly, Period::Monthly]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            _ => Err(format!("Unknown period: {}", s)),
        }
    }
}

/// Direction of recent sentiment relative to the window average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        }
    }

    /// Human-readable label used in prediction bases
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Up => "upward trend",
            TrendDirection::Down => "downward trend",
            TrendDirection::Stable => "stable trend",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrendDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(TrendDirection::Up),
            "down" => Ok(TrendDirection::Down),
            "stable" => Ok(TrendDirection::Stable),
            _ => Err(format!("Unknown trend direction: {}", s)),
        }
    }
}

/// Family of a detected pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    /// Readings recur at a regular interval
    Cyclical,
    /// A word keeps appearing in consecutive readings
    Keyword,
    /// One reading type is repeatedly followed by another
    Combination,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::Cyclical => "cyclical",
            PatternType::Keyword => "keyword",
            PatternType::Combination => "combination",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cyclical" => Ok(PatternType::Cyclical),
            "keyword" => Ok(PatternType::Keyword),
            "combination" => Ok(PatternType::Combination),
            _ => Err(format!("Unknown pattern type: {}", s)),
        }
    }
}

/// Sentiment trend within one lookback window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub period: Period,
    /// Recent sentiment relative to the window average
    pub trend: TrendDirection,
    /// 1.0 for uniform sentiment, falling to 0.0 as scores spread out
    pub confidence: f64,
    /// Most frequent words in the window, most frequent first
    pub keywords: Vec<String>,
}

/// A recurring regularity in the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    pub description: String,
    /// Cycle length in days for cyclical patterns, occurrence count otherwise
    pub frequency: u32,
    pub significance: f64,
}

/// Linear association between two factors (reading types or keywords)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub factors: [String; 2],
    /// Pearson coefficient in [-1, 1]
    pub strength: f64,
    pub description: String,
}

/// Forward-looking statement derived from a trend or cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub aspect: String,
    pub likelihood: f64,
    pub timeframe: String,
    pub basis: Vec<String>,
}

/// Full report returned by [`crate::analytics::analyze`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub trends: Vec<Trend>,
    pub patterns: Vec<Pattern>,
    pub correlations: Vec<Correlation>,
    pub predictions: Vec<Prediction>,
}

impl AnalysisResult {
    /// True when no section produced anything
    pub fn is_empty(&self) -> bool {
        self.trends.is_empty()
            && self.patterns.is_empty()
            && self.correlations.is_empty()
            && self.predictions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_lookback() {
        assert_eq!(Period::Daily.lookback_days(), 7);
        assert_eq!(Period::Weekly.lookback_days(), 30);
        assert_eq!(Period::Monthly.lookback_days(), 90);
        assert_eq!(
            Period::all(),
            &[Period::Daily, Period::Weekly, Period::Monthly]
        );
    }

    #[test]
    fn test_enum_round_trip_strings() {
        assert_eq!(Period::from_str("Weekly").unwrap(), Period::Weekly);
        assert_eq!(TrendDirection::Down.to_string(), "down");
        assert_eq!(
            PatternType::from_str("combination").unwrap(),
            PatternType::Combination
        );
        assert!(Period::from_str("yearly").is_err());
    }

    #[test]
    fn test_pattern_serializes_type_field() {
        let pattern = Pattern {
            pattern_type: PatternType::Cyclical,
            description: "every 7 days".to_string(),
            frequency: 7,
            significance: 1.0,
        };
        let json = serde_json::to_value(&pattern).unwrap();

        assert_eq!(json["type"], "cyclical");
        assert_eq!(json["frequency"], 7);
    }

    #[test]
    fn test_trend_serializes_direction_as_trend() {
        let trend = Trend {
            period: Period::Monthly,
            trend: TrendDirection::Up,
            confidence: 0.5,
            keywords: vec!["幸運".to_string()],
        };
        let json = serde_json::to_value(&trend).unwrap();

        assert_eq!(json["period"], "monthly");
        assert_eq!(json["trend"], "up");
    }

    #[test]
    fn test_empty_result() {
        assert!(AnalysisResult::default().is_empty());
    }
}

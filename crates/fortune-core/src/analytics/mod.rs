//! History Analytics - sentiment, patterns and predictions over past readings
//!
//! Given a user's chronological reading history, the engine derives:
//!
//! - **Trends** - sentiment direction and confidence per lookback window
//! - **Patterns** - cyclical timing, recurring keywords, recurring type sequences
//! - **Correlations** - Pearson correlation between reading types and keywords
//! - **Predictions** - statements built from the recent trend and strong cycles
//!
//! Every stage is a pure function over `&[Reading]`. The only clock input is
//! the explicit `now` passed to [`analyze`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fortune_core::analytics::analyze;
//!
//! let report = analyze(history.readings(), chrono::Utc::now());
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod correlation;
pub mod engine;
pub mod keywords;
pub mod patterns;
pub mod period;
pub mod prediction;
pub mod sentiment;
pub mod stats;
mod tally;
pub mod trend;
pub mod types;

pub use correlation::analyze_correlations;
pub use engine::{analyze, analyze_now};
pub use keywords::extract_keywords;
pub use patterns::detect_patterns;
pub use period::filter_by_period;
pub use prediction::generate_predictions;
pub use sentiment::score;
pub use stats::correlation;
pub use trend::{analyze_trend, analyze_trends};
pub use types::{
    AnalysisResult, Correlation, Pattern, PatternType, Period, Prediction, Trend, TrendDirection,
};

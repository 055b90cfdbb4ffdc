//! Fortune Core Library
//!
//! Reading history analytics for the fortune-telling app:
//! - Reading and history models
//! - History import from JSON and CSV exports
//! - Sentiment scoring, trend, pattern, correlation and prediction analysis

pub mod analytics;
pub mod error;
pub mod import;
pub mod models;

pub use analytics::{analyze, analyze_now, AnalysisResult};
pub use error::{Error, Result};
pub use import::{
    load_history, load_history_as, parse_csv, parse_history, parse_json, parse_timestamp, validate_chronological,
    HistoryFormat,
};
pub use models::{History, Reading};

//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Full report and single-stage commands (trends, patterns, ...)
//! - `score` - Sentiment score for an ad-hoc text

pub mod analyze;
pub mod score;

// Re-export command functions for main.rs
pub use analyze::*;
pub use score::*;

use std::path::Path;

use anyhow::{Context, Result};
use fortune_core::{load_history, load_history_as, History, HistoryFormat};
use serde::Serialize;

/// Load a history file, sorting it oldest-first when requested
///
/// The format comes from the file extension unless `format` overrides it.
pub fn load(path: &Path, format: Option<HistoryFormat>, sort: bool) -> Result<History> {
    let history = match format {
        Some(format) => load_history_as(path, format),
        None => load_history(path),
    }
    .with_context(|| format!("Failed to load history from {}", path.display()))?;
    Ok(if sort { history.sorted() } else { history })
}

/// Pretty-printed JSON for any report section
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize report")
}

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

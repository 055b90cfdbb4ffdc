//! History import from JSON and CSV exports
//!
//! Both formats carry `type`, `timestamp` and `text` per reading, plus an
//! optional `question`. The stored-history field names `date` and `result` are
//! accepted as aliases. A malformed timestamp rejects the whole file with an
//! error naming the reading; order is checked but never enforced.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{History, Reading};

/// Supported history file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
    Json,
    Csv,
}

impl HistoryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Detect format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl std::str::FromStr for HistoryFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown history format: {}", s)),
        }
    }
}

impl std::fmt::Display for HistoryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reading as it appears on disk, before timestamp parsing
#[derive(Debug, Deserialize)]
struct RawReading {
    #[serde(rename = "type")]
    reading_type: String,
    #[serde(alias = "date")]
    timestamp: String,
    #[serde(alias = "result")]
    text: String,
    #[serde(default)]
    question: Option<String>,
}

impl RawReading {
    /// Convert to a reading; `position` is 1-based for error messages
    fn into_reading(self, position: usize) -> Result<Reading> {
        let timestamp = parse_timestamp(&self.timestamp).map_err(|_| {
            Error::InvalidData(format!(
                "reading {}: invalid timestamp '{}'",
                position, self.timestamp
            ))
        })?;

        Ok(Reading {
            reading_type: self.reading_type,
            timestamp,
            text: self.text,
            question: self.question.filter(|q| !q.is_empty()),
        })
    }
}

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DD HH:MM:SS` (UTC), or a bare
/// date (midnight UTC)
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(Error::InvalidData(format!("invalid timestamp '{}'", value)))
}

/// Parse a JSON array of readings
pub fn parse_json<R: Read>(reader: R) -> Result<History> {
    let raw: Vec<RawReading> = serde_json::from_reader(reader)?;
    let readings = raw
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_reading(i + 1))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = readings.len(), "Parsed JSON history");
    Ok(History::new(readings))
}

/// Parse CSV with a `type,timestamp,text[,question]` header
pub fn parse_csv<R: Read>(reader: R) -> Result<History> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut readings = Vec::new();
    for (i, row) in rdr.deserialize::<RawReading>().enumerate() {
        readings.push(row?.into_reading(i + 1)?);
    }

    debug!(count = readings.len(), "Parsed CSV history");
    Ok(History::new(readings))
}

/// Parse history in the given format
pub fn parse_history<R: Read>(reader: R, format: HistoryFormat) -> Result<History> {
    match format {
        HistoryFormat::Json => parse_json(reader),
        HistoryFormat::Csv => parse_csv(reader),
    }
}

/// Load a history file, detecting the format from its extension
pub fn load_history(path: &Path) -> Result<History> {
    load_history_as(path, HistoryFormat::from_path(path)?)
}

/// Load a history file in the given format, whatever its extension
///
/// Out-of-order readings are logged but kept as-is.
pub fn load_history_as(path: &Path, format: HistoryFormat) -> Result<History> {
    debug!(path = %path.display(), %format, "Loading history");
    let file = File::open(path)?;
    let history = parse_history(BufReader::new(file), format)?;

    if let Some(position) = history.first_out_of_order() {
        warn!(
            path = %path.display(),
            position,
            "History is not in chronological order"
        );
    }
    Ok(history)
}

/// Reject a history whose readings are not oldest-first
pub fn validate_chronological(history: &History) -> Result<()> {
    match history.first_out_of_order() {
        None => Ok(()),
        Some(i) => Err(Error::InvalidData(format!(
            "reading {} is older than reading {}",
            i + 1,
            i
        ))),
    }
}

//! Domain models for reading history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single fortune-telling result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Fortune category (e.g. "tarot", "palm", "horoscope")
    #[serde(rename = "type")]
    pub reading_type: String,
    /// When the reading was produced
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
    /// Free-form reading result
    #[serde(alias = "result")]
    pub text: String,
    /// The question the user asked, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl Reading {
    pub fn new(
        reading_type: impl Into<String>,
        timestamp: DateTime<Utc>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            reading_type: reading_type.into(),
            timestamp,
            text: text.into(),
            question: None,
        }
    }
}

/// A user's readings, oldest first
///
/// The analytics engine assumes chronological order but never checks it;
/// use [`History::is_chronological`] or [`History::sorted`] before analysis
/// when the source order is unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Reading>);

impl History {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self(readings)
    }

    pub fn readings(&self) -> &[Reading] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the first reading older than its predecessor
    pub fn first_out_of_order(&self) -> Option<usize> {
        self.0
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
            .map(|i| i + 1)
    }

    pub fn is_chronological(&self) -> bool {
        self.first_out_of_order().is_none()
    }

    /// Stable sort oldest first; readings sharing a timestamp keep their order
    pub fn sorted(mut self) -> Self {
        self.0.sort_by_key(|r| r.timestamp);
        self
    }

    /// Distinct reading types in first-seen order
    pub fn types(&self) -> Vec<&str> {
        distinct_types(&self.0)
    }
}

/// Distinct reading types in first-seen order
pub fn distinct_types(readings: &[Reading]) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for reading in readings {
        if !types.contains(&reading.reading_type.as_str()) {
            types.push(&reading.reading_type);
        }
    }
    types
}

impl From<Vec<Reading>> for History {
    fn from(readings: Vec<Reading>) -> Self {
        Self(readings)
    }
}

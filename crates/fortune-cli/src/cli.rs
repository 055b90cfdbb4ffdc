//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fortune_core::analytics::Period;
use fortune_core::HistoryFormat;
use serde::Deserialize;

/// Fortune - find the patterns in your reading history
#[derive(Parser)]
#[command(name = "fortune")]
#[command(about = "Sentiment trends, patterns and predictions from fortune reading history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./fortune.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sections
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Options shared by every command that reads a history file
#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// History file (.json or .csv)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Read the file as json or csv regardless of its extension
    #[arg(long)]
    pub input_format: Option<HistoryFormat>,

    /// Sort readings oldest-first before analysis
    ///
    /// Exports from the app list the newest reading first.
    #[arg(long)]
    pub sort: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis: trends, patterns, correlations, predictions
    Analyze {
        #[command(flatten)]
        history: HistoryArgs,

        /// Reference time for lookback windows (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        now: Option<String>,
    },

    /// Print the sentiment score of a text
    Score {
        /// Text to score
        #[arg(short, long)]
        text: String,
    },

    /// Show sentiment trends per lookback window
    Trends {
        #[command(flatten)]
        history: HistoryArgs,

        /// Reference time for lookback windows (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        now: Option<String>,

        /// Only this window: daily, weekly, monthly
        #[arg(short, long)]
        period: Option<Period>,
    },

    /// Show cyclical, keyword and combination patterns
    Patterns {
        #[command(flatten)]
        history: HistoryArgs,
    },

    /// Show correlations between reading types and keywords
    Correlations {
        #[command(flatten)]
        history: HistoryArgs,
    },

    /// Show predictions from the recent trend and detected cycles
    Predict {
        #[command(flatten)]
        history: HistoryArgs,
    },
}

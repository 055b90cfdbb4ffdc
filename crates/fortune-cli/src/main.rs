//! Fortune CLI - reading history analytics
//!
//! Usage:
//!   fortune analyze --file history.json       Full report
//!   fortune trends --file history.json        Sentiment trends only
//!   fortune patterns --file history.csv       Recurring patterns
//!   fortune score --text "幸運と成功"          Score a single text

mod cli;
mod commands;
mod config;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { history, now } => {
            let settings = config.resolve(&history, now.as_deref())?;
            commands::cmd_analyze(&history, &settings)
        }
        Commands::Score { text } => commands::cmd_score(&text),
        Commands::Trends {
            history,
            now,
            period,
        } => {
            let settings = config.resolve(&history, now.as_deref())?;
            commands::cmd_trends(&history, &settings, period)
        }
        Commands::Patterns { history } => {
            let settings = config.resolve(&history, None)?;
            commands::cmd_patterns(&history, &settings)
        }
        Commands::Correlations { history } => {
            let settings = config.resolve(&history, None)?;
            commands::cmd_correlations(&history, &settings)
        }
        Commands::Predict { history } => {
            let settings = config.resolve(&history, None)?;
            commands::cmd_predict(&history, &settings)
        }
    }
}

//! Analysis command implementations

use std::fmt::{self, Write};

use anyhow::Result;
use fortune_core::analytics::{
    analyze, analyze_correlations, analyze_trend, analyze_trends, detect_patterns,
    generate_predictions, AnalysisResult, Correlation, Pattern, Period, Prediction, Trend,
};

use super::{load, to_json, truncate};
use crate::cli::{HistoryArgs, OutputFormat};
use crate::config::RunSettings;

const RULE: &str = "   ─────────────────────────────────────────────────────────────";

pub fn cmd_analyze(args: &HistoryArgs, settings: &RunSettings) -> Result<()> {
    let history = load(&args.file, args.input_format, settings.sort)?;
    let report = analyze(history.readings(), settings.now);
    println!("{}", render_report(&report, settings.format)?);
    Ok(())
}

pub fn cmd_trends(args: &HistoryArgs, settings: &RunSettings, period: Option<Period>) -> Result<()> {
    let history = load(&args.file, args.input_format, settings.sort)?;
    let trends: Vec<Trend> = match period {
        Some(p) => analyze_trend(history.readings(), p, settings.now)
            .into_iter()
            .collect(),
        None => analyze_trends(history.readings(), settings.now),
    };
    println!("{}", render_section(&trends, settings.format, trends_text)?);
    Ok(())
}

pub fn cmd_patterns(args: &HistoryArgs, settings: &RunSettings) -> Result<()> {
    let history = load(&args.file, args.input_format, settings.sort)?;
    let patterns = detect_patterns(history.readings());
    println!("{}", render_section(&patterns, settings.format, patterns_text)?);
    Ok(())
}

pub fn cmd_correlations(args: &HistoryArgs, settings: &RunSettings) -> Result<()> {
    let history = load(&args.file, args.input_format, settings.sort)?;
    let correlations = analyze_correlations(history.readings());
    println!(
        "{}",
        render_section(&correlations, settings.format, correlations_text)?
    );
    Ok(())
}

pub fn cmd_predict(args: &HistoryArgs, settings: &RunSettings) -> Result<()> {
    let history = load(&args.file, args.input_format, settings.sort)?;
    let predictions = generate_predictions(history.readings());
    println!(
        "{}",
        render_section(&predictions, settings.format, predictions_text)?
    );
    Ok(())
}

/// Render the full report
pub fn render_report(report: &AnalysisResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => Ok([
            trends_text(&report.trends)?,
            patterns_text(&report.patterns)?,
            correlations_text(&report.correlations)?,
            predictions_text(&report.predictions)?,
        ]
        .join("\n")),
    }
}

/// Render one stage's output
pub fn render_section<T: serde::Serialize>(
    items: &[T],
    format: OutputFormat,
    text: fn(&[T]) -> Result<String, fmt::Error>,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(items),
        OutputFormat::Text => Ok(text(items)?),
    }
}

pub fn trends_text(trends: &[Trend]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "📈 Trends")?;
    writeln!(out, "{}", RULE)?;
    if trends.is_empty() {
        writeln!(out, "   Not enough recent readings.")?;
        return Ok(out);
    }

    writeln!(
        out,
        "   {:8} │ {:7} │ {:>10} │ Keywords",
        "Period", "Trend", "Confidence"
    )?;
    for trend in trends {
        writeln!(
            out,
            "   {:8} │ {:7} │ {:>9.0}% │ {}",
            trend.period.as_str(),
            trend.trend.as_str(),
            trend.confidence * 100.0,
            trend.keywords.join(", ")
        )?;
    }
    Ok(out)
}

pub fn patterns_text(patterns: &[Pattern]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "🔁 Patterns")?;
    writeln!(out, "{}", RULE)?;
    if patterns.is_empty() {
        writeln!(out, "   No recurring patterns found.")?;
        return Ok(out);
    }

    for pattern in patterns {
        writeln!(
            out,
            "   {:11} │ {:>4} │ {:>4.0}% │ {}",
            pattern.pattern_type.as_str(),
            pattern.frequency,
            pattern.significance * 100.0,
            truncate(&pattern.description, 60)
        )?;
    }
    Ok(out)
}

pub fn correlations_text(correlations: &[Correlation]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "🔗 Correlations")?;
    writeln!(out, "{}", RULE)?;
    if correlations.is_empty() {
        writeln!(out, "   No notable correlations.")?;
        return Ok(out);
    }

    for correlation in correlations {
        writeln!(
            out,
            "   {:>6.2} │ {}",
            correlation.strength,
            truncate(&correlation.description, 70)
        )?;
    }
    Ok(out)
}

pub fn predictions_text(predictions: &[Prediction]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "🔮 Predictions")?;
    writeln!(out, "{}", RULE)?;
    if predictions.is_empty() {
        writeln!(out, "   Not enough history to predict.")?;
        return Ok(out);
    }

    for prediction in predictions {
        writeln!(
            out,
            "   {} ({}) - {:.0}% likely",
            prediction.aspect,
            prediction.timeframe,
            prediction.likelihood * 100.0
        )?;
        writeln!(out, "      based on: {}", prediction.basis.join("; "))?;
    }
    Ok(out)
}

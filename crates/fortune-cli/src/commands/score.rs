//! Sentiment scoring command

use anyhow::Result;
use fortune_core::analytics::sentiment::{score, tokenize};

/// Human-readable breakdown of a text's score
pub fn render_score(text: &str) -> String {
    let tokens: Vec<&str> = tokenize(text).collect();
    format!(
        "Score: {:+}  ({} token{})",
        score(text),
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" }
    )
}

pub fn cmd_score(text: &str) -> Result<()> {
    println!("{}", render_score(text));
    Ok(())
}

//! Diagnostics formatting.
//!
//! Everything here writes to stderr: stdout is reserved for the single
//! resolved version line.

use crate::domain::VersionBump;
use console::style;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print the commit analysis summary for a verbose run.
///
/// Shows the release tag the range was measured from, up to 10 commit
/// headlines, and the recommended bump.
pub fn display_analysis(base_tag: Option<&str>, messages: &[String], bump: Option<VersionBump>) {
    match base_tag {
        Some(tag) => eprintln!(
            "{}",
            style(format!("Analyzing commits since tag '{}'", tag)).bold()
        ),
        None => eprintln!(
            "{}",
            style("Analyzing all commits (no release tag found)").bold()
        ),
    }

    for (i, message) in messages.iter().take(10).enumerate() {
        let headline: String = message
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(60)
            .collect();
        eprintln!("  {}. {}", i + 1, headline);
    }

    if messages.len() > 10 {
        eprintln!("  ... and {} more commits", messages.len() - 10);
    }

    match bump {
        Some(kind) => eprintln!("Recommended bump: {}", style(kind).green()),
        None => eprintln!("No qualifying commits; keeping current version"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_analysis_with_tag() {
        let messages = vec!["feat: one".to_string(), "fix: two".to_string()];
        display_analysis(Some("v1.0.0"), &messages, Some(VersionBump::Minor));
    }

    #[test]
    fn test_display_analysis_no_commits() {
        display_analysis(None, &[], None);
    }
}

use crate::config::ConventionalCommitsConfig;
use crate::domain::{ParsedCommit, VersionBump};

/// Analyzes commit messages to recommend a version bump
pub struct VersionAnalyzer {
    config: ConventionalCommitsConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: ConventionalCommitsConfig) -> Self {
        VersionAnalyzer { config }
    }

    /// Recommend a bump for the commits since the last release point.
    ///
    /// Returns `None` when there are no qualifying commits (an empty range),
    /// which callers treat as "keep the current version". Otherwise the
    /// highest category found wins: breaking changes recommend a major bump,
    /// features a minor bump, and everything else a patch bump.
    pub fn recommend(&self, messages: &[String]) -> Option<VersionBump> {
        if messages.is_empty() {
            return None;
        }

        let mut highest = VersionBump::Patch;

        for message in messages {
            let parsed = ParsedCommit::parse(message);

            // Breaking changes short-circuit: nothing outranks major
            if parsed.is_breaking_change {
                return Some(VersionBump::Major);
            }

            let lowered = message.to_lowercase();

            for indicator in &self.config.breaking_change_indicators {
                if message.contains(indicator) {
                    return Some(VersionBump::Major);
                }
            }

            for keyword in &self.config.major_keywords {
                if lowered.contains(keyword) {
                    return Some(VersionBump::Major);
                }
            }

            let mut bump = self.bump_for_type(&parsed);

            for keyword in &self.config.minor_keywords {
                if lowered.contains(keyword) {
                    bump = VersionBump::Minor;
                }
            }

            if bump > highest {
                highest = bump;
            }
        }

        Some(highest)
    }

    /// Map a parsed commit type to its bump category. Types outside the
    /// configured list count like any other non-feature commit.
    fn bump_for_type(&self, parsed: &ParsedCommit) -> VersionBump {
        if !self.config.types.contains(&parsed.r#type) {
            return VersionBump::Patch;
        }

        match parsed.r#type.as_str() {
            "feat" | "feature" => VersionBump::Minor,
            _ => VersionBump::Patch,
        }
    }
}

use regex::Regex;

/// Parsed representation of a conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub scope: Option<String>,
    pub description: String,
    pub is_breaking_change: bool,
}

impl ParsedCommit {
    /// Parse a commit message according to conventional commits spec
    /// Supports formats:
    /// - type(scope)!: description
    /// - type(scope): description
    /// - type!: description
    /// - type: description
    /// - non-conventional text
    pub fn parse(message: &str) -> Self {
        let header = message.lines().next().unwrap_or("");
        let breaking_footer =
            message.contains("BREAKING CHANGE:") || message.contains("BREAKING-CHANGE:");

        if let Some(captures) = Regex::new(r"^([a-z]+)(?:\(([^)]+)\))?(!?):\s*(.*)")
            .ok()
            .and_then(|re| re.captures(header))
        {
            let r#type = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let scope = captures.get(2).map(|m| m.as_str().to_string());
            let has_exclamation = captures.get(3).map(|m| m.as_str()) == Some("!");
            let description = captures
                .get(4)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            return ParsedCommit {
                r#type,
                scope,
                description,
                is_breaking_change: has_exclamation || breaking_footer,
            };
        }

        // Non-conventional commits degrade to chore
        ParsedCommit {
            r#type: "chore".to_string(),
            scope: None,
            description: header.to_string(),
            is_breaking_change: breaking_footer,
        }
    }
}

use crate::error::{NextVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for next-version.
///
/// Contains the VERSION file override and conventional commit settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// Path to the VERSION file, relative to the working directory or
    /// absolute. Defaults to `<repo>/VERSION` when unset.
    #[serde(default)]
    pub version_file: Option<String>,

    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,
}

/// Returns the default list of conventional commit types.
fn default_commit_types() -> Vec<String> {
    vec![
        "feat".to_string(),
        "fix".to_string(),
        "docs".to_string(),
        "style".to_string(),
        "refactor".to_string(),
        "test".to_string(),
        "chore".to_string(),
        "build".to_string(),
        "ci".to_string(),
        "perf".to_string(),
    ]
}

/// Returns the default list of breaking change indicators.
fn default_breaking_change_indicators() -> Vec<String> {
    vec![
        "BREAKING CHANGE:".to_string(),
        "BREAKING-CHANGE:".to_string(),
    ]
}

/// Returns the default list of keywords that trigger major version bumps.
fn default_major_keywords() -> Vec<String> {
    vec!["breaking".to_string(), "deprecate".to_string()]
}

/// Returns the default list of keywords that trigger minor version bumps.
fn default_minor_keywords() -> Vec<String> {
    vec![
        "feature".to_string(),
        "feat".to_string(),
        "enhancement".to_string(),
    ]
}

/// Configuration for conventional commit analysis.
///
/// Defines the types, breaking change indicators, and keywords used to analyze
/// commits and determine the recommended bump. The defaults match the
/// Conventional Commits preset.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_commit_types")]
    pub types: Vec<String>,

    #[serde(default = "default_breaking_change_indicators")]
    pub breaking_change_indicators: Vec<String>,

    #[serde(default = "default_major_keywords")]
    pub major_keywords: Vec<String>,

    #[serde(default = "default_minor_keywords")]
    pub minor_keywords: Vec<String>,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            types: default_commit_types(),
            breaking_change_indicators: default_breaking_change_indicators(),
            major_keywords: default_major_keywords(),
            minor_keywords: default_minor_keywords(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            NextVersionError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new("./nextversion.toml").exists() {
        fs::read_to_string("./nextversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".nextversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| NextVersionError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}

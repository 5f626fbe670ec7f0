//! Version resolution workflow
//!
//! Sequences the three steps behind the tool: read the stored current
//! version, classify the commits made since the last release tag, and apply
//! the recommended increment. Repository root and VERSION file location are
//! explicit inputs; nothing in here depends on ambient process state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::VersionAnalyzer;
use crate::config::Config;
use crate::domain::version::{increment, parse_version};
use crate::domain::VersionBump;
use crate::error::{NextVersionError, Result};
use crate::git::{Git2Repository, Repository};

/// Explicit inputs for a resolver run
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverArgs {
    /// Repository root (or any path inside it; discovery walks up)
    pub repo_root: PathBuf,

    /// Path to the VERSION file holding the current version
    pub version_file: PathBuf,
}

/// Outcome of a successful resolver run
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The version read from the VERSION file, trimmed
    pub current: String,

    /// The version to emit: `current` advanced by `bump`, or `current`
    /// unchanged when no bump was recommended
    pub next: String,

    /// The recommended bump, if any qualifying commits were found
    pub bump: Option<VersionBump>,

    /// The release tag the commit range was measured from
    pub base_tag: Option<String>,

    /// The commit messages that were analyzed
    pub commit_messages: Vec<String>,
}

/// Read and trim the current version from the VERSION file.
///
/// A missing file is a configuration error. The contents are NOT validated
/// here: a malformed version only fails later, if an increment is attempted.
pub fn read_current_version(version_file: &Path) -> Result<String> {
    if !version_file.exists() {
        return Err(NextVersionError::config(format!(
            "VERSION file not found: {}",
            version_file.display()
        )));
    }

    let contents = fs::read_to_string(version_file)?;
    Ok(contents.trim().to_string())
}

/// Resolve the next version for the repository at `args.repo_root`.
///
/// The VERSION file is checked before any git access so a missing file is
/// reported as such even outside a repository.
pub fn resolve(args: &ResolverArgs, config: &Config) -> Result<Resolution> {
    let current = read_current_version(&args.version_file)?;
    let repo = Git2Repository::discover(&args.repo_root)?;
    resolve_from(&repo, current, config)
}

/// Core resolution over any [Repository] implementation.
///
/// Classification runs to completion before any increment is attempted; a
/// failure there surfaces as an analysis error carrying the cause. No
/// recommendation means no qualifying commits, and the current version is
/// passed through verbatim.
pub fn resolve_from<R: Repository>(
    repo: &R,
    current: String,
    config: &Config,
) -> Result<Resolution> {
    let base_tag = repo
        .latest_release_tag()
        .map_err(NextVersionError::into_analysis)?;

    let commits = repo
        .commits_since_tag(base_tag.as_deref())
        .map_err(NextVersionError::into_analysis)?;
    let commit_messages: Vec<String> = commits.into_iter().map(|c| c.message).collect();

    let analyzer = VersionAnalyzer::new(config.conventional_commits.clone());
    let bump = analyzer.recommend(&commit_messages);

    let next = match bump {
        Some(kind) => increment(&parse_version(&current)?, kind).to_string(),
        None => current.clone(),
    };

    Ok(Resolution {
        current,
        next,
        bump,
        base_tag,
        commit_messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use std::fs;

    fn released_repo(messages: &[&str]) -> MockRepository {
        let mut repo = MockRepository::new();
        repo.add_commit("chore: initial");
        repo.tag_head("v1.2.3");
        for message in messages {
            repo.add_commit(*message);
        }
        repo
    }

    #[test]
    fn test_resolve_from_patch() {
        let repo = released_repo(&["fix: handle empty input"]);
        let resolution = resolve_from(&repo, "1.2.3".to_string(), &Config::default()).unwrap();
        assert_eq!(resolution.next, "1.2.4");
        assert_eq!(resolution.bump, Some(VersionBump::Patch));
        assert_eq!(resolution.base_tag, Some("v1.2.3".to_string()));
    }

    #[test]
    fn test_resolve_from_minor() {
        let repo = released_repo(&["feat: add export command"]);
        let resolution = resolve_from(&repo, "1.2.3".to_string(), &Config::default()).unwrap();
        assert_eq!(resolution.next, "1.3.0");
        assert_eq!(resolution.bump, Some(VersionBump::Minor));
    }

    #[test]
    fn test_resolve_from_major() {
        let repo = released_repo(&["feat!: drop legacy flags"]);
        let resolution = resolve_from(&repo, "1.2.3".to_string(), &Config::default()).unwrap();
        assert_eq!(resolution.next, "2.0.0");
        assert_eq!(resolution.bump, Some(VersionBump::Major));
    }

    #[test]
    fn test_resolve_from_no_commits_is_noop() {
        let repo = released_repo(&[]);
        let resolution = resolve_from(&repo, "1.2.3".to_string(), &Config::default()).unwrap();
        assert_eq!(resolution.next, "1.2.3");
        assert_eq!(resolution.bump, None);
        assert!(resolution.commit_messages.is_empty());
    }

    #[test]
    fn test_resolve_from_noop_passes_malformed_version_through() {
        // The stored version is only parsed when an increment is attempted
        let repo = released_repo(&[]);
        let resolution =
            resolve_from(&repo, "not-a-version".to_string(), &Config::default()).unwrap();
        assert_eq!(resolution.next, "not-a-version");
        assert_eq!(resolution.bump, None);
    }

    #[test]
    fn test_resolve_from_malformed_version_with_bump_fails() {
        let repo = released_repo(&["fix: something"]);
        let err = resolve_from(&repo, "not-a-version".to_string(), &Config::default()).unwrap_err();
        assert!(matches!(err, NextVersionError::Version(_)));
    }

    #[test]
    fn test_resolve_from_untagged_history_analyzes_everything() {
        let mut repo = MockRepository::new();
        repo.add_commit("chore: initial");
        repo.add_commit("feat: first feature");

        let resolution = resolve_from(&repo, "0.1.0".to_string(), &Config::default()).unwrap();
        assert_eq!(resolution.base_tag, None);
        assert_eq!(resolution.commit_messages.len(), 2);
        assert_eq!(resolution.next, "0.2.0");
    }

    #[test]
    fn test_resolve_from_is_idempotent() {
        let repo = released_repo(&[]);
        let first = resolve_from(&repo, "1.2.3".to_string(), &Config::default()).unwrap();
        let second = resolve_from(&repo, "1.2.3".to_string(), &Config::default()).unwrap();
        assert_eq!(first.next, second.next);
    }

    #[test]
    fn test_read_current_version_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "  1.2.3\n").unwrap();

        assert_eq!(read_current_version(&path).unwrap(), "1.2.3");
    }

    #[test]
    fn test_read_current_version_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_current_version(&dir.path().join("VERSION")).unwrap_err();
        assert!(matches!(err, NextVersionError::Config(_)));
        assert!(err.to_string().contains("VERSION file not found"));
    }
}

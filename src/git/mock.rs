use crate::domain::version::parse_release_tag;
use crate::error::{NextVersionError, Result};
use crate::git::{CommitInfo, Repository};
use std::collections::HashMap;

/// Mock repository for testing without actual git operations.
///
/// History is a flat, chronological commit list; tags point at positions in
/// that list.
pub struct MockRepository {
    commits: Vec<CommitInfo>,
    tags: HashMap<String, usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Append a commit to the history, returning its position
    pub fn add_commit(&mut self, message: impl Into<String>) -> usize {
        let position = self.commits.len();
        self.commits.push(CommitInfo {
            hash: format!("{:07x}", position),
            message: message.into(),
            author: "Test Author".to_string(),
        });
        position
    }

    /// Add a tag pointing at a commit position
    pub fn add_tag(&mut self, name: impl Into<String>, position: usize) {
        self.tags.insert(name.into(), position);
    }

    /// Tag the current tip of history
    pub fn tag_head(&mut self, name: impl Into<String>) {
        let position = self.commits.len().saturating_sub(1);
        self.add_tag(name, position);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn latest_release_tag(&self) -> Result<Option<String>> {
        let latest = self
            .tags
            .iter()
            .filter_map(|(name, position)| {
                parse_release_tag(name).map(|version| (name, *position, version))
            })
            .max_by(|(_, pos_a, ver_a), (_, pos_b, ver_b)| {
                pos_a.cmp(pos_b).then_with(|| ver_a.cmp(ver_b))
            })
            .map(|(name, _, _)| name.clone());

        Ok(latest)
    }

    fn commits_since_tag(&self, tag_name: Option<&str>) -> Result<Vec<CommitInfo>> {
        let start = match tag_name {
            Some(name) => {
                let position = self.tags.get(name).copied().ok_or_else(|| {
                    NextVersionError::analysis(format!("Tag not found: {}", name))
                })?;
                position + 1
            }
            None => 0,
        };

        Ok(self.commits.iter().skip(start).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_basic() {
        let mut repo = MockRepository::new();
        repo.add_commit("feat: first");
        repo.add_commit("fix: second");

        let commits = repo.commits_since_tag(None).unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "feat: first");
    }

    #[test]
    fn test_mock_repository_commits_since_tag() {
        let mut repo = MockRepository::new();
        repo.add_commit("chore: initial");
        repo.tag_head("v1.0.0");
        repo.add_commit("fix: after release");

        let commits = repo.commits_since_tag(Some("v1.0.0")).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "fix: after release");
    }

    #[test]
    fn test_mock_repository_latest_release_tag() {
        let mut repo = MockRepository::new();
        repo.add_commit("chore: initial");
        repo.tag_head("v1.0.0");
        repo.add_commit("feat: more");
        repo.tag_head("v1.1.0");

        assert_eq!(
            repo.latest_release_tag().unwrap(),
            Some("v1.1.0".to_string())
        );
    }

    #[test]
    fn test_mock_repository_ignores_non_release_tags() {
        let mut repo = MockRepository::new();
        repo.add_commit("chore: initial");
        repo.tag_head("v1.0.0");
        repo.add_commit("ci: nightly build");
        repo.tag_head("nightly");

        assert_eq!(
            repo.latest_release_tag().unwrap(),
            Some("v1.0.0".to_string())
        );
    }

    #[test]
    fn test_mock_repository_unknown_tag_errors() {
        let repo = MockRepository::new();
        assert!(repo.commits_since_tag(Some("v9.9.9")).is_err());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert_eq!(repo.latest_release_tag().unwrap(), None);
        assert!(repo.commits_since_tag(None).unwrap().is_empty());
    }
}

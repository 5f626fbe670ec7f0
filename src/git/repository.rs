use crate::domain::version::parse_release_tag;
use crate::error::{NextVersionError, Result};
use crate::git::CommitInfo;
use git2::{Oid, Repository as Git2Repo};
use semver::Version;
use std::collections::HashMap;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at the given root
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            NextVersionError::analysis(format!(
                "Not a git repository at '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| NextVersionError::analysis("HEAD is detached or invalid"))
    }

    /// Map every release-shaped tag to the commit it points at. Handles both
    /// lightweight and annotated tags.
    fn release_tags_by_commit(&self) -> Result<HashMap<Oid, Vec<(String, Version)>>> {
        let mut tags_by_commit: HashMap<Oid, Vec<(String, Version)>> = HashMap::new();
        let tags = self.repo.tag_names(None)?;

        for tag_name in tags.iter().flatten() {
            let version = match parse_release_tag(tag_name) {
                Some(version) => version,
                None => continue,
            };

            if let Ok(tag_ref) = self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                if let Ok(tag_obj) = tag_ref.peel(git2::ObjectType::Any) {
                    tags_by_commit
                        .entry(tag_obj.id())
                        .or_default()
                        .push((tag_name.to_string(), version));
                }
            }
        }

        Ok(tags_by_commit)
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        match self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
            Ok(reference) => {
                let oid = reference
                    .peel(git2::ObjectType::Any)
                    .map_err(NextVersionError::Git)?
                    .id();
                Ok(Some(oid))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl super::Repository for Git2Repository {
    fn latest_release_tag(&self) -> Result<Option<String>> {
        let head_oid = self.head_oid()?;
        let tags_by_commit = self.release_tags_by_commit()?;

        if tags_by_commit.is_empty() {
            return Ok(None);
        }

        // Walk history from HEAD; the first tagged commit we meet carries the
        // latest release. Several tags on one commit resolve to the highest
        // version.
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(candidates) = tags_by_commit.get(&oid) {
                let latest = candidates
                    .iter()
                    .max_by(|(_, a), (_, b)| a.cmp(b))
                    .map(|(name, _)| name.clone());
                return Ok(latest);
            }
        }

        Ok(None)
    }

    fn commits_since_tag(&self, tag_name: Option<&str>) -> Result<Vec<CommitInfo>> {
        let head_oid = self.head_oid()?;

        let stop_oid = match tag_name {
            Some(name) => self.find_tag_oid(name)?,
            None => None,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;

            if Some(oid) == stop_oid {
                break;
            }

            let commit = self.repo.find_commit(oid)?;
            let message = commit.message().unwrap_or("(empty message)").to_string();
            let author = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(CommitInfo {
                hash: oid.to_string(),
                message,
                author,
            });
        }

        // Chronological order, oldest first
        commits.reverse();
        Ok(commits)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is thread-safe for the
// read operations used here via libgit2's threading model.
unsafe impl Sync for Git2Repository {}

//! Git history access abstraction
//!
//! The resolver only ever reads history: it needs the latest release tag
//! reachable from HEAD and the commit messages recorded since that tag. The
//! [Repository] trait captures exactly that surface so the analysis pipeline
//! can run against a real repository ([repository::Git2Repository]) or an
//! in-memory one ([mock::MockRepository]) in tests.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit hash
    pub hash: String,
    /// The commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

/// Read-only git operations used for commit classification.
///
/// Implementors must be `Send + Sync`. Methods return
/// [crate::error::Result<T>]; implementations map underlying errors (like
/// `git2::Error`) into [crate::error::NextVersionError] variants.
pub trait Repository: Send + Sync {
    /// Find the most recent release tag reachable from HEAD.
    ///
    /// A tag counts as a release tag when its name parses as a semantic
    /// version after stripping a leading 'v'/'V'. When several release tags
    /// point at the same commit, the highest version wins.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - Name of the latest release tag
    /// * `Ok(None)` - If no release tag is reachable from HEAD
    /// * `Err` - If history cannot be read
    fn latest_release_tag(&self) -> Result<Option<String>>;

    /// Collect the commits made after a tag, up to and including HEAD.
    ///
    /// Commits are returned in chronological order (oldest first). With
    /// `None`, every commit reachable from HEAD is returned.
    ///
    /// # Arguments
    /// * `tag_name` - Tag marking the last release point, if any
    fn commits_since_tag(&self, tag_name: Option<&str>) -> Result<Vec<CommitInfo>>;
}

use thiserror::Error;

/// Unified error type for next-version operations
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Commit analysis failed: {0}")]
    Analysis(String),

    #[error("Version computation failed: {0}")]
    Version(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }

    /// Create a commit-analysis error with context
    pub fn analysis(msg: impl Into<String>) -> Self {
        NextVersionError::Analysis(msg.into())
    }

    /// Create a version-computation error with context
    pub fn version(msg: impl Into<String>) -> Self {
        NextVersionError::Version(msg.into())
    }

    /// Fold an error from the classification step into the analysis category,
    /// keeping the underlying cause in the message. Analysis errors pass
    /// through untouched.
    pub fn into_analysis(self) -> Self {
        match self {
            e @ NextVersionError::Analysis(_) => e,
            other => NextVersionError::Analysis(other.to_string()),
        }
    }
}

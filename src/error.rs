use thiserror::Error;

/// Unified error type for release version resolution
#[derive(Error, Debug)]
pub enum ReleaseVersionError {
    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Tag source error: {0}")]
    TagSource(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("GitHub request failed: {0}")]
    GitHub(#[from] octocrab::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in new-release-version
pub type Result<T> = std::result::Result<T, ReleaseVersionError>;

impl ReleaseVersionError {
    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        ReleaseVersionError::Parse(msg.into())
    }

    /// Create a not-found error with context
    pub fn not_found(msg: impl Into<String>) -> Self {
        ReleaseVersionError::NotFound(msg.into())
    }

    /// Create a tag source error with context
    pub fn tag_source(msg: impl Into<String>) -> Self {
        ReleaseVersionError::TagSource(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseVersionError::Config(msg.into())
    }

    /// True for failures talking to git or the hosting API.
    pub fn is_tag_source_failure(&self) -> bool {
        matches!(
            self,
            ReleaseVersionError::TagSource(_)
                | ReleaseVersionError::Git(_)
                | ReleaseVersionError::GitHub(_)
        )
    }
}

use std::fmt;

/// Non-fatal conditions met while resolving a version.
///
/// None of these abort resolution; they are logged so that `--debug` runs
/// explain which inputs were skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but does not name a release version
    UnparsableTag { tag: String, reason: String },
    /// Manifest file exists but carries no recognizable version field
    ManifestWithoutVersion { file: String, reason: String },
    /// Manifest declares a version that cannot be parsed
    UnparsableManifestVersion {
        file: String,
        version: String,
        reason: String,
    },
    /// None of the known manifest files yielded a version
    NoManifestFound { directory: String },
    /// Refreshing tags from the remote failed; local tags are used as-is
    FetchFailed { remote: String, reason: String },
    /// The base version was advanced past every existing release tag
    BaseAheadOfTags { base: String, latest: String },
}

impl BoundaryWarning {
    /// Emit the warning through `tracing`.
    pub fn log(&self) {
        match self {
            BoundaryWarning::FetchFailed { .. } => tracing::warn!("{}", self),
            _ => tracing::debug!("{}", self),
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
            BoundaryWarning::ManifestWithoutVersion { file, reason } => {
                write!(f, "No version in '{}': {}", file, reason)
            }
            BoundaryWarning::UnparsableManifestVersion {
                file,
                version,
                reason,
            } => {
                write!(
                    f,
                    "Cannot parse version '{}' from '{}': {}",
                    version, file, reason
                )
            }
            BoundaryWarning::NoManifestFound { directory } => {
                write!(
                    f,
                    "No version file found in '{}', using 0.0.0 as base version",
                    directory
                )
            }
            BoundaryWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tags.",
                    remote, reason
                )
            }
            BoundaryWarning::BaseAheadOfTags { base, latest } => {
                write!(
                    f,
                    "Base version {} is ahead of latest tag {}, using base version",
                    base, latest
                )
            }
        }
    }
}

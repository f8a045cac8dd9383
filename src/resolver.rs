//! Release version resolution
//!
//! Combines the base version declared by the project (or given explicitly)
//! with the release tags reported by a [TagSource] and computes the next
//! release version.

use crate::boundary::BoundaryWarning;
use crate::domain::{strip_version_prefix, SemanticVersion, Tag};
use crate::error::{ReleaseVersionError, Result};
use crate::git::TagSource;
use crate::manifest::{DirectoryFiles, FileSource, ManifestExtractor, ManifestRules};
use std::path::PathBuf;

/// Caller supplied parameters for one resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionConfig {
    /// Project directory searched for manifest files
    pub directory: PathBuf,
    /// Explicit base version; skips the manifest search when set
    pub base_version: Option<String>,
    /// Only consider tags sharing major.minor with the base version
    pub same_release: bool,
    /// Increment the minor component instead of the patch component
    pub minor: bool,
    pub debug: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        ResolutionConfig {
            directory: PathBuf::from("."),
            base_version: None,
            same_release: false,
            minor: false,
            debug: false,
        }
    }
}

/// Outcome of [VersionResolver::latest_version]
#[derive(Debug, Clone, PartialEq)]
pub struct LatestVersion {
    /// Highest applicable release tag, `None` when the base version takes precedence
    pub latest: Option<SemanticVersion>,
    pub base: SemanticVersion,
}

/// Computes release versions for a project
pub struct VersionResolver {
    config: ResolutionConfig,
    extractor: ManifestExtractor,
    files: Box<dyn FileSource>,
}

impl VersionResolver {
    /// Create a resolver reading manifests from `config.directory` with the default rules
    pub fn new(config: ResolutionConfig) -> Self {
        let files = Box::new(DirectoryFiles::new(&config.directory));
        VersionResolver {
            config,
            extractor: ManifestExtractor::default(),
            files,
        }
    }

    /// Replace the manifest rules searched for a base version
    pub fn with_rules(mut self, rules: ManifestRules) -> Self {
        self.extractor = ManifestExtractor::new(rules);
        self
    }

    /// Replace where manifest files are read from
    pub fn with_file_source(mut self, files: impl FileSource + 'static) -> Self {
        self.files = Box::new(files);
        self
    }

    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// The project's base version.
    ///
    /// An explicit base version always wins and must parse; like a tag it may
    /// carry one `v` prefix. Otherwise the
    /// manifest files are searched, falling back to `0.0.0` when none
    /// declares a version.
    ///
    /// WARNING: the first matching manifest in rule order wins, so a project
    /// with several supported manifest files should declare its version in
    /// only one of them or configure the rule order.
    pub fn base_version(&self) -> Result<SemanticVersion> {
        if let Some(raw) = &self.config.base_version {
            return SemanticVersion::parse(strip_version_prefix(raw)).map_err(|e| {
                ReleaseVersionError::parse(format!("Invalid base version '{}': {}", raw, e))
            });
        }

        match self.extractor.extract_from_directory(self.files.as_ref()) {
            Ok(found) => {
                tracing::debug!(
                    "base version {} from {} ('{}')",
                    found.version,
                    found.file_name,
                    found.raw
                );
                Ok(found.version)
            }
            Err(ReleaseVersionError::NotFound(_)) => {
                BoundaryWarning::NoManifestFound {
                    directory: self.config.directory.display().to_string(),
                }
                .log();
                Ok(SemanticVersion::zero())
            }
            Err(e) => Err(e),
        }
    }

    /// The project's latest known release version and its base version.
    ///
    /// E.g.
    ///
    /// - base 1.0 and highest tag 1.1.0 gives latest 1.1.0
    /// - base 1.2 and highest tag 1.1.0 gives no latest; the base takes precedence
    /// - no tags gives no latest
    pub fn latest_version<T: TagSource + ?Sized>(&self, tags: &T) -> Result<LatestVersion> {
        let base = self.base_version()?;

        tracing::debug!("listing tags from {}", tags.describe());
        let names = tags.list_tags()?;
        tracing::debug!("found tags: {:?}", names);
        if names.is_empty() {
            return Ok(LatestVersion { latest: None, base });
        }

        let mut versions = Vec::with_capacity(names.len());
        for name in names {
            let tag = Tag::new(name);
            let Some(version) = tag.version() else {
                BoundaryWarning::UnparsableTag {
                    tag: tag.name,
                    reason: "not a release version".to_string(),
                }
                .log();
                continue;
            };
            if self.config.same_release && !base.major_minor_equal(&version) {
                continue;
            }
            versions.push(version);
        }

        versions.sort_by(SemanticVersion::compare);
        tracing::debug!(
            "found versions: {:?}",
            versions.iter().map(ToString::to_string).collect::<Vec<_>>()
        );

        let Some(latest) = versions.pop() else {
            return Ok(LatestVersion { latest: None, base });
        };

        if base.compare(&latest).is_gt() {
            BoundaryWarning::BaseAheadOfTags {
                base: base.to_string(),
                latest: latest.to_string(),
            }
            .log();
            return Ok(LatestVersion { latest: None, base });
        }

        Ok(LatestVersion {
            latest: Some(latest),
            base,
        })
    }

    /// The next release version.
    ///
    /// E.g.
    ///
    /// - latest 1.2.0 gives 1.2.1, or 1.3.0 in minor mode
    /// - no releases and a base version of 1.0 gives 1.0.0 unchanged
    /// - no releases and no base version gives 0.0.1, or 0.1.0 in minor mode
    pub fn new_version<T: TagSource + ?Sized>(&self, tags: &T) -> Result<SemanticVersion> {
        let LatestVersion { latest, base } = self.latest_version(tags)?;

        let current = match latest {
            Some(latest) => latest,
            None if !base.is_zero() => return Ok(base),
            None => base,
        };

        let next = if self.config.minor {
            current.bump_minor()?
        } else {
            current.bump_patch()?
        };
        tracing::debug!("incremented {} to {}", current, next);

        Ok(next)
    }
}

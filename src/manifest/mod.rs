//! Base version discovery from project manifest files
//!
//! A [ManifestExtractor] walks an ordered list of [ManifestRule]s, reading each
//! named file through a [FileSource] and applying the rule's [Extraction].
//! The first rule that yields a parseable version wins.
//!
//! The default rule order is fixed, so a directory containing more than one
//! supported manifest always resolves to the same file. Callers who want a
//! different priority build their own [ManifestRules].

pub mod extraction;

pub use extraction::Extraction;

use crate::boundary::BoundaryWarning;
use crate::domain::SemanticVersion;
use crate::error::{ReleaseVersionError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read access to files relative to a project directory
pub trait FileSource {
    /// Read the raw bytes of `relative_path`.
    ///
    /// A missing file is reported as an [io::ErrorKind::NotFound] error.
    fn read_file(&self, relative_path: &str) -> io::Result<Vec<u8>>;
}

/// [FileSource] backed by a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryFiles {
    root: PathBuf,
}

impl DirectoryFiles {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        DirectoryFiles {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSource for DirectoryFiles {
    fn read_file(&self, relative_path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(relative_path))
    }
}

/// A known manifest file name paired with the way to read its version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestRule {
    pub file_name: &'static str,
    pub extraction: Extraction,
}

impl ManifestRule {
    pub const fn new(file_name: &'static str, extraction: Extraction) -> Self {
        ManifestRule {
            file_name,
            extraction,
        }
    }

    /// Apply this rule's extraction to the manifest contents
    pub fn extract(&self, contents: &[u8]) -> Result<String> {
        self.extraction.extract(contents)
    }
}

/// Built-in rules in default priority order
pub const STANDARD_RULES: &[ManifestRule] = &[
    ManifestRule::new("versions.gradle", Extraction::VersionsGradle),
    ManifestRule::new("build.gradle", Extraction::BuildGradle),
    ManifestRule::new("build.gradle.kts", Extraction::BuildGradle),
    ManifestRule::new("gradle.properties", Extraction::GradleProperties),
    ManifestRule::new("pom.xml", Extraction::PomXml),
    ManifestRule::new("package.json", Extraction::PackageJson),
    ManifestRule::new("setup.cfg", Extraction::SetupCfg),
    ManifestRule::new("setup.py", Extraction::SetupPy),
    ManifestRule::new("CMakeLists.txt", Extraction::CMakeLists),
    ManifestRule::new("Makefile", Extraction::Makefile),
];

/// Immutable ordered list of manifest rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRules {
    rules: Vec<ManifestRule>,
}

impl ManifestRules {
    pub fn new(rules: Vec<ManifestRule>) -> Self {
        ManifestRules { rules }
    }

    /// Restrict and reorder the built-in rules by file name.
    ///
    /// # Returns
    /// * `Ok(ManifestRules)` - Rules in the order the names were given
    /// * `Err` - If a name is not a supported manifest file
    pub fn from_file_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut rules = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let rule = STANDARD_RULES
                .iter()
                .find(|rule| rule.file_name == name)
                .ok_or_else(|| {
                    ReleaseVersionError::config(format!(
                        "Unsupported manifest file '{}', expected one of: {}",
                        name,
                        STANDARD_RULES
                            .iter()
                            .map(|rule| rule.file_name)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })?;
            rules.push(*rule);
        }
        Ok(ManifestRules { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestRule> {
        self.rules.iter()
    }

    pub fn file_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.file_name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ManifestRules {
    fn default() -> Self {
        ManifestRules::new(STANDARD_RULES.to_vec())
    }
}

/// Version found in a manifest file
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestVersion {
    /// Manifest the version came from
    pub file_name: &'static str,
    /// Version string as written in the manifest
    pub raw: String,
    pub version: SemanticVersion,
}

/// Searches a directory for the first manifest declaring a version
#[derive(Debug, Clone, Default)]
pub struct ManifestExtractor {
    rules: ManifestRules,
}

impl ManifestExtractor {
    pub fn new(rules: ManifestRules) -> Self {
        ManifestExtractor { rules }
    }

    pub fn rules(&self) -> &ManifestRules {
        &self.rules
    }

    /// Find the base version declared by the first matching manifest.
    ///
    /// Missing files, files without a version field, and versions that do not
    /// parse are skipped in favour of the next rule.
    ///
    /// # Returns
    /// * `Ok(ManifestVersion)` - Version from the first rule that succeeded
    /// * `Err(ReleaseVersionError::NotFound)` - If no rule succeeded
    pub fn extract_from_directory<F: FileSource + ?Sized>(
        &self,
        files: &F,
    ) -> Result<ManifestVersion> {
        for rule in self.rules.iter() {
            let contents = match files.read_file(rule.file_name) {
                Ok(contents) => contents,
                Err(e) => {
                    tracing::trace!("skipping {}: {}", rule.file_name, e);
                    continue;
                }
            };
            tracing::debug!("found {}", rule.file_name);

            let raw = match rule.extract(&contents) {
                Ok(raw) => raw,
                Err(e) => {
                    BoundaryWarning::ManifestWithoutVersion {
                        file: rule.file_name.to_string(),
                        reason: e.to_string(),
                    }
                    .log();
                    continue;
                }
            };

            match SemanticVersion::parse(&raw) {
                Ok(version) => {
                    return Ok(ManifestVersion {
                        file_name: rule.file_name,
                        raw,
                        version,
                    })
                }
                Err(e) => BoundaryWarning::UnparsableManifestVersion {
                    file: rule.file_name.to_string(),
                    version: raw,
                    reason: e.to_string(),
                }
                .log(),
            }
        }

        Err(ReleaseVersionError::not_found(format!(
            "No version file found among: {}",
            self.rules.file_names().join(", ")
        )))
    }
}

use crate::error::{ReleaseVersionError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

lazy_static::lazy_static! {
    /// Lenient version grammar: one to three numeric components, an optional
    /// pre-release (hyphenless only when it starts with a letter) and
    /// optional build metadata. Prefixes such as `v` are not accepted here.
    static ref LENIENT_VERSION_REGEX: Regex = Regex::new(concat!(
        r"^([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?",
        r"(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)|([A-Za-z][0-9A-Za-z-]*(?:\.[0-9A-Za-z-]+)*))?",
        r"(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ))
    .unwrap();
}

/// Semantic version representation
///
/// Ordering for release selection is numeric only, see [`SemanticVersion::compare`].
/// The pre-release label is carried so that a base version such as
/// `1.2.3-SNAPSHOT` can be reported as declared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
    pub build: Option<String>,
}

impl SemanticVersion {
    /// Create a new release version without labels
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre: None,
            build: None,
        }
    }

    /// The `0.0.0` version used when nothing declares a version
    pub fn zero() -> Self {
        SemanticVersion::default()
    }

    /// Parse a version string in any of the common manifest forms.
    ///
    /// Missing components default to zero, so `1.0` becomes `1.0.0` and
    /// `1.0-SNAPSHOT` becomes `1.0.0-SNAPSHOT`. Labels must satisfy strict
    /// semver identifier rules once normalized.
    ///
    /// # Example
    /// ```
    /// # use new_release_version::domain::SemanticVersion;
    /// let v = SemanticVersion::parse("1.0-SNAPSHOT").unwrap();
    /// assert_eq!(v.to_string(), "1.0.0-SNAPSHOT");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let captures = LENIENT_VERSION_REGEX.captures(trimmed).ok_or_else(|| {
            ReleaseVersionError::parse(format!("No usable version in '{}'", raw))
        })?;

        let component = |index: usize| -> Result<u64> {
            match captures.get(index) {
                Some(m) => m.as_str().parse::<u64>().map_err(|_| {
                    ReleaseVersionError::parse(format!(
                        "Version component '{}' in '{}' is out of range",
                        m.as_str(),
                        raw
                    ))
                }),
                None => Ok(0),
            }
        };

        let major = component(1)?;
        let minor = component(2)?;
        let patch = component(3)?;

        let pre = match captures.get(4).or_else(|| captures.get(5)) {
            Some(m) => {
                let label = semver::Prerelease::new(m.as_str()).map_err(|e| {
                    ReleaseVersionError::parse(format!("Invalid pre-release in '{}': {}", raw, e))
                })?;
                Some(label.as_str().to_string())
            }
            None => None,
        };

        let build = match captures.get(6) {
            Some(m) => {
                let metadata = semver::BuildMetadata::new(m.as_str()).map_err(|e| {
                    ReleaseVersionError::parse(format!(
                        "Invalid build metadata in '{}': {}",
                        raw, e
                    ))
                })?;
                Some(metadata.as_str().to_string())
            }
            None => None,
        };

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            pre,
            build,
        })
    }

    /// Numeric ordering on major, minor, then patch. Labels are ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }

    /// Next patch release; labels are cleared
    ///
    /// Fails when the patch component is already at its maximum.
    pub fn bump_patch(&self) -> Result<Self> {
        let patch = self.patch.checked_add(1).ok_or_else(|| {
            ReleaseVersionError::parse(format!("Cannot increment patch of {}", self))
        })?;
        Ok(SemanticVersion::new(self.major, self.minor, patch))
    }

    /// Next minor release; patch resets to zero and labels are cleared
    pub fn bump_minor(&self) -> Result<Self> {
        let minor = self.minor.checked_add(1).ok_or_else(|| {
            ReleaseVersionError::parse(format!("Cannot increment minor of {}", self))
        })?;
        Ok(SemanticVersion::new(self.major, minor, 0))
    }

    /// True when both versions belong to the same major.minor release line
    pub fn major_minor_equal(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }

    /// True for `0.0.0`, whatever the labels
    pub fn is_zero(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }
}

impl FromStr for SemanticVersion {
    type Err = ReleaseVersionError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

//! Per-format version extraction from raw manifest bytes.

use crate::error::{ReleaseVersionError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use serde_json::Value;

/// Token matched as a version inside manifest patterns
pub const VERSION_TOKEN: &str = r"[.0-9]+(-[0-9A-Za-z_]+)?";

/// Placeholder replaced with [`VERSION_TOKEN`] in pattern templates
const VERSION_PLACEHOLDER: &str = "{version}";

pub const VERSIONS_GRADLE_PATTERN: &str = r#"(?m)project\.version\s*=\s*['"]({version})['"]$"#;
pub const BUILD_GRADLE_PATTERN: &str = r#"(?m)^version\s*=\s*['"]({version})['"]$"#;
pub const GRADLE_PROPERTIES_PATTERN: &str = r"(?m)^\s*version\s*[=:]\s*({version})[ \t]*$";
pub const SETUP_CFG_PATTERN: &str = r"(?m)^version\s*=\s*({version})$";
pub const SETUP_PY_PATTERN: &str = r#"(?ms)setup\(.*\s+version\s*=\s*['"]({version})['"].*\)$"#;
pub const CMAKE_LISTS_PATTERN: &str = r"(?ms)^project\s*\(.*\s+VERSION\s+({version}).*\)$";
pub const MAKEFILE_PATTERN: &str = r"(?m)^VERSION\s*:=\s*({version})$";

fn compile(template: &str) -> Regex {
    Regex::new(&template.replace(VERSION_PLACEHOLDER, VERSION_TOKEN)).unwrap()
}

lazy_static::lazy_static! {
    static ref VERSIONS_GRADLE_REGEX: Regex = compile(VERSIONS_GRADLE_PATTERN);
    static ref BUILD_GRADLE_REGEX: Regex = compile(BUILD_GRADLE_PATTERN);
    static ref GRADLE_PROPERTIES_REGEX: Regex = compile(GRADLE_PROPERTIES_PATTERN);
    static ref SETUP_CFG_REGEX: Regex = compile(SETUP_CFG_PATTERN);
    static ref SETUP_PY_REGEX: Regex = compile(SETUP_PY_PATTERN);
    static ref CMAKE_LISTS_REGEX: Regex = compile(CMAKE_LISTS_PATTERN);
    static ref MAKEFILE_REGEX: Regex = compile(MAKEFILE_PATTERN);
}

/// How a version string is pulled out of a manifest file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// `project.version = '...'` in `versions.gradle`
    VersionsGradle,
    /// Top-level `version = '...'` in `build.gradle` and `build.gradle.kts`
    BuildGradle,
    GradleProperties,
    SetupCfg,
    /// `version=` keyword of the `setup(...)` call
    SetupPy,
    /// `VERSION` argument of the `project(...)` command
    CMakeLists,
    Makefile,
    /// Maven `version` element directly under the root element
    PomXml,
    /// Node `version` field of the top-level object
    PackageJson,
}

impl Extraction {
    /// Extract the raw version string from file contents.
    ///
    /// Fails with [`ReleaseVersionError::NotFound`] when the file has no
    /// recognizable version field.
    pub fn extract(&self, contents: &[u8]) -> Result<String> {
        let found = match self {
            Extraction::PomXml => pom_version(contents)?,
            Extraction::PackageJson => package_json_version(contents),
            pattern => pattern.regex().and_then(|re| match_version(contents, re)),
        };

        found.ok_or_else(|| ReleaseVersionError::not_found("No version found"))
    }

    /// Compiled pattern for the regex based formats
    fn regex(&self) -> Option<&'static Regex> {
        let re: &'static Regex = match self {
            Extraction::VersionsGradle => &*VERSIONS_GRADLE_REGEX,
            Extraction::BuildGradle => &*BUILD_GRADLE_REGEX,
            Extraction::GradleProperties => &*GRADLE_PROPERTIES_REGEX,
            Extraction::SetupCfg => &*SETUP_CFG_REGEX,
            Extraction::SetupPy => &*SETUP_PY_REGEX,
            Extraction::CMakeLists => &*CMAKE_LISTS_REGEX,
            Extraction::Makefile => &*MAKEFILE_REGEX,
            Extraction::PomXml | Extraction::PackageJson => return None,
        };
        Some(re)
    }
}

fn match_version(contents: &[u8], re: &Regex) -> Option<String> {
    let text = String::from_utf8_lossy(contents);
    re.captures(&text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|version| !version.is_empty())
}

fn package_json_version(contents: &[u8]) -> Option<String> {
    let project: Value = serde_json::from_slice(contents).ok()?;
    project
        .get("version")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|version| !version.is_empty())
        .map(str::to_string)
}

/// Text of the first `version` element that is a direct child of the root.
fn pom_version(contents: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(contents);
    reader.trim_text(true);

    let invalid = |position: usize, e: quick_xml::Error| {
        ReleaseVersionError::parse(format!("Invalid pom.xml at byte {}: {}", position, e))
    };

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut value: Option<String> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| invalid(reader.buffer_position(), e))?;

        match event {
            Event::Start(element) => {
                depth += 1;
                if depth == 2 && element.local_name().as_ref() == b"version" {
                    value = Some(String::new());
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some(version) = value.take() {
                        let version = version.trim();
                        if !version.is_empty() {
                            return Ok(Some(version.to_string()));
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) if depth == 2 => {
                if let Some(version) = value.as_mut() {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| invalid(reader.buffer_position(), e))?;
                    version.push_str(&unescaped);
                }
            }
            Event::CData(data) if depth == 2 => {
                if let Some(version) = value.as_mut() {
                    version.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(None)
}

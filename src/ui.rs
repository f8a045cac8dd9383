//! Terminal output.
//!
//! stdout carries only the resolved version, with no trailing newline, so
//! that pipelines can capture it directly. Everything else goes to stderr.

use crate::domain::SemanticVersion;
use std::io::{self, Write};

/// Build information baked in at compile time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
}

/// Build information of this binary.
///
/// The commit and date come from the `NEW_RELEASE_VERSION_COMMIT` and
/// `NEW_RELEASE_VERSION_BUILD_DATE` variables when set at build time.
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("NEW_RELEASE_VERSION_COMMIT").unwrap_or("unknown"),
        date: option_env!("NEW_RELEASE_VERSION_BUILD_DATE").unwrap_or("unknown"),
    }
}

/// Text printed for `--version`
pub fn tool_version() -> String {
    format!("new-release-version {}", build_info().version)
}

/// Log build information at debug level.
pub fn log_build_info() {
    let info = build_info();
    tracing::debug!(
        version = info.version,
        commit = info.commit,
        date = info.date,
        "build information"
    );
}

/// Write a resolved version to `out` without a trailing newline.
pub fn write_version<W: Write>(out: &mut W, version: &SemanticVersion) -> io::Result<()> {
    write!(out, "{}", version)?;
    out.flush()
}

/// Print the resolved version to stdout without a trailing newline.
pub fn display_version(version: &SemanticVersion) -> io::Result<()> {
    write_version(&mut io::stdout().lock(), version)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", console::style("ERROR:").red().bold(), message);
}

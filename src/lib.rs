pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod resolver;
pub mod ui;

pub use domain::SemanticVersion;
pub use error::{ReleaseVersionError, Result};
pub use resolver::{LatestVersion, ResolutionConfig, VersionResolver};

//! Domain logic - pure version rules independent of files and git

pub mod tag;
pub mod version;

pub use tag::{strip_version_prefix, Tag};
pub use version::SemanticVersion;

//! Tag source abstraction layer
//!
//! The resolver only needs the names of existing release tags. This module
//! defines the [TagSource] capability and its implementations:
//!
//! - [repository::LocalTagSource]: tags of a local repository, read with `git2`
//! - [github::GitHubTagSource]: tags of a GitHub repository, read with `octocrab`
//! - [mock::MockTagSource]: a fixed tag list for testing
//!
//! # Usage
//!
//! ```rust
//! # use new_release_version::git::{MockTagSource, TagSource};
//! let source = MockTagSource::new(["v1.0.0", "v1.0.1"]);
//! let tags = source.list_tags().unwrap();
//! assert_eq!(tags.len(), 2);
//! ```

pub mod github;
pub mod mock;
pub mod repository;

pub use github::GitHubTagSource;
pub use mock::MockTagSource;
pub use repository::LocalTagSource;

use crate::error::Result;

/// Source of raw tag names
///
/// ## Ordering
///
/// No ordering or de-duplication is promised. The resolver sorts parsed
/// versions itself, and duplicate names parse to equal versions.
///
/// ## Error Handling
///
/// A failure to reach the underlying repository or API is returned as an
/// error and aborts resolution. An empty list is not an error.
pub trait TagSource {
    /// List every tag name known to the source
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Short human readable description used in log output
    fn describe(&self) -> String;
}

impl<T: TagSource + ?Sized> TagSource for Box<T> {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

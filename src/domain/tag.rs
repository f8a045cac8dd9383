use crate::domain::SemanticVersion;

/// Strip surrounding whitespace and at most one leading `v` or `V`
pub fn strip_version_prefix(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed)
}

/// Represents a raw tag name reported by a tag source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Extract version number from tag (e.g., "v1.2.3" -> "1.2.3")
    pub fn version_part(&self) -> &str {
        strip_version_prefix(&self.name)
    }

    /// The release version this tag names, or `None` for non-release tags
    pub fn version(&self) -> Option<SemanticVersion> {
        SemanticVersion::parse(self.version_part()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new() {
        let tag = Tag::new("v1.2.3");
        assert_eq!(tag.name, "v1.2.3");
    }

    #[test]
    fn test_tag_version_part() {
        assert_eq!(Tag::new("v1.2.3").version_part(), "1.2.3");
        assert_eq!(Tag::new("V1.2.3").version_part(), "1.2.3");
        assert_eq!(Tag::new("1.2.3").version_part(), "1.2.3");
    }

    #[test]
    fn test_tag_version_part_strips_one_prefix() {
        assert_eq!(Tag::new("vv1.2.3").version_part(), "v1.2.3");
        assert_eq!(Tag::new("vv1.2.3").version(), None);
        assert_eq!(Tag::new("Vv1.2.3").version(), None);
    }

    #[test]
    fn test_tag_version() {
        assert_eq!(
            Tag::new("v99.0.17").version(),
            Some(SemanticVersion::new(99, 0, 17))
        );
        assert_eq!(
            Tag::new("v1.0").version(),
            Some(SemanticVersion::new(1, 0, 0))
        );
    }

    #[test]
    fn test_non_release_tags() {
        assert_eq!(Tag::new("release-candidate").version(), None);
        assert_eq!(Tag::new("").version(), None);
        assert_eq!(Tag::new("latest").version(), None);
    }
}

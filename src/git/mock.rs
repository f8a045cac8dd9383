use crate::error::{ReleaseVersionError, Result};
use crate::git::TagSource;

/// Tag source returning a fixed list, or a fixed failure
#[derive(Debug, Clone, Default)]
pub struct MockTagSource {
    tags: Vec<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a mock that returns the given tag names
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a mock whose `list_tags` always fails
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        match &self.failure {
            Some(message) => Err(ReleaseVersionError::tag_source(message.clone())),
            None => Ok(self.tags.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock tag source".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tag_source_lists_tags() {
        let mut source = MockTagSource::new(["v1.0.0"]);
        source.add_tag("v2.0.0");

        let tags = source.list_tags().unwrap();
        assert_eq!(tags, vec!["v1.0.0".to_string(), "v2.0.0".to_string()]);
    }

    #[test]
    fn test_mock_tag_source_default() {
        let source = MockTagSource::default();
        assert!(source.list_tags().unwrap().is_empty());
    }

    #[test]
    fn test_mock_tag_source_failure() {
        let source = MockTagSource::failing("connection refused");
        let err = source.list_tags().unwrap_err();
        assert!(err.is_tag_source_failure());
        assert!(err.to_string().contains("connection refused"));
    }
}

//! Mock content store for testing.
//!
//! Provides [`MockStore`] for unit testing without filesystem access.

use std::path::PathBuf;

use crate::model::{Author, Document, Frontmatter, Guide, Section};
use crate::store::{ContentStore, StoreError, StoreErrorKind};

/// In-memory content store.
///
/// # Example
///
/// ```ignore
/// use devcenter_storage::{ContentStore, MockStore};
///
/// let store = MockStore::new()
///     .with_section("auth", "Authentication", &[("/auth/intro", "Introduction")])
///     .with_author("a1", "Ada");
///
/// assert_eq!(store.sections().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    sections: Vec<Section>,
    authors: Vec<Author>,
    documents: Vec<Document>,
    failing: bool,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section with `(path, title)` guides.
    #[must_use]
    pub fn with_section(mut self, id: &str, name: &str, guides: &[(&str, &str)]) -> Self {
        let guides = guides
            .iter()
            .map(|(path, title)| Guide {
                path: (*path).to_owned(),
                title: (*title).to_owned(),
                section_id: id.to_owned(),
            })
            .collect();
        self.sections.push(Section {
            id: id.to_owned(),
            name: name.to_owned(),
            guides,
        });
        self
    }

    /// Add a fully specified section as-is.
    #[must_use]
    pub fn with_raw_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Add an author record.
    #[must_use]
    pub fn with_author(mut self, id: &str, name: &str) -> Self {
        self.authors.push(Author {
            id: id.to_owned(),
            name: name.to_owned(),
            extra: serde_json::Map::new(),
        });
        self
    }

    /// Add a document.
    #[must_use]
    pub fn with_document(mut self, id: &str, frontmatter: Frontmatter, body: &str) -> Self {
        self.documents.push(Document {
            id: id.to_owned(),
            source_path: PathBuf::from(format!("docs/{id}.md")),
            frontmatter,
            body: body.to_owned(),
        });
        self
    }

    /// Make every query fail with a backend error.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::new(StoreErrorKind::Other).with_backend("Mock"));
        }
        Ok(())
    }
}

impl ContentStore for MockStore {
    fn sections(&self) -> Result<Vec<Section>, StoreError> {
        self.check()?;
        Ok(self.sections.clone())
    }

    fn authors(&self) -> Result<Vec<Author>, StoreError> {
        self.check()?;
        Ok(self.authors.clone())
    }

    fn documents(&self) -> Result<Vec<Document>, StoreError> {
        self.check()?;
        Ok(self.documents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, NodeKind};

    #[test]
    fn test_mock_default_lookup_scans_collection() {
        let store = MockStore::new()
            .with_author("a1", "Ada")
            .with_section("auth", "Authentication", &[("/auth/intro", "Intro")]);

        let author = store.get_node_by_id("a1", NodeKind::AuthorJson).unwrap();
        assert!(matches!(author, Some(Node::Author(a)) if a.name == "Ada"));

        let section = store.get_node_by_id("auth", NodeKind::Section).unwrap();
        assert_eq!(section.map(|n| n.kind()), Some(NodeKind::Section));

        assert!(store.get_node_by_id("auth", NodeKind::AuthorJson).unwrap().is_none());
    }

    #[test]
    fn test_mock_failing() {
        let store = MockStore::new().with_author("a1", "Ada").failing();

        let err = store.authors().unwrap_err();
        assert_eq!(err.to_string(), "[Mock] Error");
    }
}

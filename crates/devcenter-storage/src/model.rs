//! Content model shared by the store, the schema and the page builder.
//!
//! Every type here is plain data deserialized from the content source.
//! Cross-node links (`Guide::section_id`, `Frontmatter::author`) are weak
//! references: ids resolved by lookup, never owned.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A guide page listed inside a documentation section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    /// Declared URL path (e.g., "/auth/intro"). Empty when the source omits it.
    #[serde(default)]
    pub path: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Id of the owning section.
    #[serde(default)]
    pub section_id: String,
}

/// A documentation section grouping guides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section id referenced by `Guide::section_id`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Guides in content order.
    #[serde(default)]
    pub guides: Vec<Guide>,
}

impl Section {
    /// Fill in `section_id` on embedded guides that omit it.
    ///
    /// Guides that declare a different section keep their own value so
    /// the builder can report the mismatch.
    #[must_use]
    pub fn with_guide_owners(mut self) -> Self {
        for guide in &mut self.guides {
            if guide.section_id.is_empty() {
                guide.section_id.clone_from(&self.id);
            }
        }
        self
    }
}

/// Author record (`AuthorJson` node).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Author id referenced by `Frontmatter::author`.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Any other fields (bio, avatar, links).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metadata block at the top of a Markdown/MDX document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Declared URL path of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Author id (weak reference to an [`Author`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Arbitrary additional fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A Markdown/MDX content node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    /// Node id: source path relative to the docs root, without extension.
    pub id: String,
    /// File the document was read from.
    pub source_path: PathBuf,
    /// Parsed frontmatter.
    pub frontmatter: Frontmatter,
    /// Body after the frontmatter block.
    pub body: String,
}

/// Node type used by keyed lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Documentation section.
    Section,
    /// Author record.
    AuthorJson,
    /// Markdown/MDX document.
    Mdx,
}

/// A content node returned by [`ContentStore::get_node_by_id`](crate::ContentStore::get_node_by_id).
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Section(Section),
    Author(Author),
    Document(Document),
}

impl Node {
    /// Kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Section(_) => NodeKind::Section,
            Self::Author(_) => NodeKind::AuthorJson,
            Self::Document(_) => NodeKind::Mdx,
        }
    }
}

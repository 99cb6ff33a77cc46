//! Content store trait and error types.
//!
//! [`ContentStore`] is the query contract the page builder and the schema
//! resolvers depend on: list every node of a shape, or fetch one node by id
//! and type.

use std::path::PathBuf;

use crate::model::{Author, Document, Node, NodeKind, Section};

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Content exists but could not be parsed.
    InvalidContent,
    /// Other/unknown error category.
    Other,
}

/// Content store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    /// Semantic error category.
    pub kind: StoreErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreErrorKind::NotFound).with_path(path)
    }

    /// Create an invalid content error for a file that failed to parse.
    #[must_use]
    pub fn invalid_content(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::new(StoreErrorKind::InvalidContent)
            .with_path(path)
            .with_source(source)
    }

    /// Create a store error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StoreErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StoreErrorKind::PermissionDenied,
            _ => StoreErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::PermissionDenied => "Permission denied",
            StoreErrorKind::InvalidContent => "Invalid content",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Queryable build-time content store.
///
/// Implementations are read-only after loading and may be shared across
/// threads; the page builder computes pages for many nodes in parallel.
pub trait ContentStore: Send + Sync {
    /// All section nodes, with their guides, in content order.
    fn sections(&self) -> Result<Vec<Section>, StoreError>;

    /// All author records.
    fn authors(&self) -> Result<Vec<Author>, StoreError>;

    /// All Markdown/MDX documents.
    fn documents(&self) -> Result<Vec<Document>, StoreError>;

    /// Get a node by id and type.
    ///
    /// Returns `Ok(None)` when no node of that kind has the id. The default
    /// implementation scans the matching collection; backends with an index
    /// should override it.
    fn get_node_by_id(&self, id: &str, kind: NodeKind) -> Result<Option<Node>, StoreError> {
        let node = match kind {
            NodeKind::Section => self
                .sections()?
                .into_iter()
                .find(|s| s.id == id)
                .map(Node::Section),
            NodeKind::AuthorJson => self
                .authors()?
                .into_iter()
                .find(|a| a.id == id)
                .map(Node::Author),
            NodeKind::Mdx => self
                .documents()?
                .into_iter()
                .find(|d| d.id == id)
                .map(Node::Document),
        };
        Ok(node)
    }
}

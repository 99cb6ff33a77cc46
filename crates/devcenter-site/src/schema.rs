//! Schema customization: derived fields on content nodes.
//!
//! Templates consume a denormalized frontmatter where weak references are
//! already resolved. The `author` field is always resolved against the
//! `AuthorJson` collection; additional virtual fields can be registered
//! with [`Schema::with_resolver`].
//!
//! Resolution is read-only and never fails: an unknown id or a store error
//! yields `None`, since these fields are cosmetic.

use std::collections::BTreeMap;
use std::sync::Arc;

use devcenter_storage::{Author, ContentStore, Frontmatter, Node, NodeKind};
use serde::Serialize;
use serde_json::{Map, Value};

/// Resolver for a derived frontmatter field.
///
/// Called once per node; must not mutate shared state, since nodes are
/// resolved in parallel.
pub trait FieldResolver: Send + Sync {
    /// Compute the field value for `frontmatter`, or `None` to omit it.
    fn resolve(&self, frontmatter: &Frontmatter, store: &dyn ContentStore) -> Option<Value>;
}

impl<F> FieldResolver for F
where
    F: Fn(&Frontmatter, &dyn ContentStore) -> Option<Value> + Send + Sync,
{
    fn resolve(&self, frontmatter: &Frontmatter, store: &dyn ContentStore) -> Option<Value> {
        self(frontmatter, store)
    }
}

/// Frontmatter with references resolved.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResolvedFrontmatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Full author record, `None` when unset or unresolved.
    pub author: Option<Author>,
    /// Raw extra fields plus derived fields (derived values win).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Field resolvers bound to a content store.
pub struct Schema {
    store: Arc<dyn ContentStore>,
    resolvers: BTreeMap<String, Box<dyn FieldResolver>>,
}

impl Schema {
    /// Create a schema that resolves `author` and no other derived fields.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            resolvers: BTreeMap::new(),
        }
    }

    /// Register a derived field.
    #[must_use]
    pub fn with_resolver(mut self, field: impl Into<String>, resolver: impl FieldResolver + 'static) -> Self {
        self.resolvers.insert(field.into(), Box::new(resolver));
        self
    }

    /// Look up an author record by id.
    pub fn resolve_author(&self, id: &str) -> Option<Author> {
        match self.store.get_node_by_id(id, NodeKind::AuthorJson) {
            Ok(Some(Node::Author(author))) => Some(author),
            Ok(_) => {
                tracing::debug!(author = id, "Author not found");
                None
            }
            Err(e) => {
                tracing::warn!(author = id, error = %e, "Author lookup failed");
                None
            }
        }
    }

    /// Denormalize a frontmatter block.
    pub fn resolve(&self, frontmatter: &Frontmatter) -> ResolvedFrontmatter {
        let author = frontmatter
            .author
            .as_deref()
            .and_then(|id| self.resolve_author(id));

        let mut fields = frontmatter.extra.clone();
        for (name, resolver) in &self.resolvers {
            match resolver.resolve(frontmatter, self.store.as_ref()) {
                Some(value) => {
                    fields.insert(name.clone(), value);
                }
                None => {
                    fields.remove(name);
                }
            }
        }

        ResolvedFrontmatter {
            title: frontmatter.title.clone(),
            path: frontmatter.path.clone(),
            author,
            fields,
        }
    }
}

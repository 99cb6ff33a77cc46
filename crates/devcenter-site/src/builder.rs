//! Page builder: one routed page per content node.
//!
//! The builder queries every section (with its guides) and every document
//! from a [`ContentStore`], derives a URL path per node and registers a
//! [`PageDescriptor`] with a [`PageRouter`].
//!
//! # Pages
//!
//! - Each guide becomes a page at its declared path, with the owning
//!   section, its sibling guides and previous/next links in the context.
//!   A document whose frontmatter `path` equals the guide path supplies the
//!   guide's body.
//! - Every other document becomes a page at its frontmatter `path`.
//!
//! # Failures
//!
//! Content errors abort the build: a node without a path, a path containing
//! `.` or `..` segments, a guide whose section id does not resolve, and two
//! nodes claiming the same URL path.

use std::collections::HashMap;
use std::sync::Arc;

use devcenter_storage::{ContentStore, Document, Guide, Section, StoreError};
use rayon::prelude::*;
use serde::Serialize;

use crate::schema::{ResolvedFrontmatter, Schema};

/// Template a page is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Guide,
    Document,
}

/// A page registered with the router.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// URL path with a leading slash.
    pub url_path: String,
    pub template: TemplateId,
    pub context: PageContext,
}

/// Per-page data handed to the template.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageContext {
    Guide(GuideContext),
    Document(DocumentContext),
}

impl PageContext {
    /// Page title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Guide(guide) => &guide.title,
            Self::Document(doc) => &doc.title,
        }
    }
}

/// Reference to the section owning a guide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionRef {
    pub id: String,
    pub name: String,
}

/// Link to another guide of the same section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuideLink {
    pub title: String,
    pub path: String,
    /// True for the guide the page is rendered for.
    pub active: bool,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub title: String,
    pub path: String,
}

/// Context of a guide page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideContext {
    pub title: String,
    pub path: String,
    pub section: SectionRef,
    /// All guides of the section in content order.
    pub siblings: Vec<GuideLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<GuideLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<GuideLink>,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Frontmatter of the backing document, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<ResolvedFrontmatter>,
    /// Markdown body of the backing document, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Context of a standalone document page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentContext {
    pub id: String,
    pub title: String,
    pub frontmatter: ResolvedFrontmatter,
    pub body: String,
}

/// Error returned by the page builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{node} has no path")]
    MissingPath { node: String },

    #[error("{node} has an invalid path: {path}")]
    InvalidPath { node: String, path: String },

    #[error("guide {path} references unknown section {section_id}")]
    UnknownSection { path: String, section_id: String },

    #[error("duplicate page path {url_path} ({first} and {second})")]
    DuplicatePath {
        url_path: String,
        first: String,
        second: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Sink for built pages.
pub trait PageRouter {
    /// Register a page.
    fn create_page(&mut self, page: PageDescriptor);
}

/// In-memory router collecting pages in registration order.
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
    index: HashMap<String, usize>,
}

impl PageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered pages in order.
    #[must_use]
    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    /// Page registered at `url_path`.
    #[must_use]
    pub fn get(&self, url_path: &str) -> Option<&PageDescriptor> {
        self.index.get(url_path).map(|&i| &self.pages[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageRouter for PageRegistry {
    fn create_page(&mut self, page: PageDescriptor) {
        self.index.insert(page.url_path.clone(), self.pages.len());
        self.pages.push(page);
    }
}

/// Counts of pages emitted by a build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub guides: usize,
    pub documents: usize,
}

impl BuildSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.guides + self.documents
    }
}

/// Index of the section owning a guide at `path`.
///
/// A trailing slash on `path` is tolerated (`/auth/intro/` matches a guide
/// declared as `/auth/intro`).
#[must_use]
pub fn find_active_section(sections: &[Section], path: &str) -> Option<usize> {
    sections.iter().position(|section| {
        section
            .guides
            .iter()
            .any(|g| g.path == path || format!("{}/", g.path) == path)
    })
}

/// Builds page descriptors from a content store.
pub struct PageBuilder {
    store: Arc<dyn ContentStore>,
    schema: Schema,
}

impl PageBuilder {
    /// Create a builder with the default schema over `store`.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        let schema = Schema::new(Arc::clone(&store));
        Self { store, schema }
    }

    /// Create a builder with a customized schema.
    pub fn with_schema(store: Arc<dyn ContentStore>, schema: Schema) -> Self {
        Self { store, schema }
    }

    /// Compute every page without registering it.
    ///
    /// Guides come first (section order, then guide order), followed by
    /// standalone documents in store order.
    pub fn pages(&self) -> Result<(Vec<PageDescriptor>, BuildSummary), BuildError> {
        let sections = self.store.sections()?;
        let documents = self.store.documents()?;

        let section_index: HashMap<&str, &Section> =
            sections.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut documents_by_path: HashMap<String, &Document> = HashMap::new();
        for doc in &documents {
            if let Some(path) = doc.frontmatter.path.as_deref().filter(|p| !p.trim().is_empty()) {
                let url_path = normalize_url_path(path);
                if let Some(first) = documents_by_path.insert(url_path.clone(), doc) {
                    return Err(BuildError::DuplicatePath {
                        url_path,
                        first: format!("document \"{}\"", first.id),
                        second: format!("document \"{}\"", doc.id),
                    });
                }
            }
        }

        let guides: Vec<&Guide> = sections.iter().flat_map(|s| &s.guides).collect();

        let guide_pages = guides
            .par_iter()
            .map(|guide| self.guide_page(guide, &section_index, &documents_by_path))
            .collect::<Result<Vec<_>, _>>()?;

        let claimed: Vec<&str> = guide_pages.iter().map(|p| p.url_path.as_str()).collect();
        let standalone: Vec<&Document> = documents
            .iter()
            .filter(|doc| {
                doc.frontmatter
                    .path
                    .as_deref()
                    .is_none_or(|p| !claimed.contains(&normalize_url_path(p).as_str()))
            })
            .collect();

        let document_pages = standalone
            .par_iter()
            .map(|doc| self.document_page(doc))
            .collect::<Result<Vec<_>, _>>()?;

        let summary = BuildSummary {
            guides: guide_pages.len(),
            documents: document_pages.len(),
        };

        let mut pages = guide_pages;
        pages.extend(document_pages);
        check_unique_paths(&pages)?;

        Ok((pages, summary))
    }

    /// Build every page and register it with `router`.
    ///
    /// Nothing is registered when the build fails.
    pub fn build(&self, router: &mut dyn PageRouter) -> Result<BuildSummary, BuildError> {
        let (pages, summary) = self.pages()?;
        for page in pages {
            tracing::debug!(url_path = %page.url_path, template = ?page.template, "Creating page");
            router.create_page(page);
        }
        tracing::info!(
            guides = summary.guides,
            documents = summary.documents,
            "Built pages"
        );
        Ok(summary)
    }

    fn guide_page(
        &self,
        guide: &Guide,
        sections: &HashMap<&str, &Section>,
        documents_by_path: &HashMap<String, &Document>,
    ) -> Result<PageDescriptor, BuildError> {
        let node = format!("guide \"{}\"", guide.title);
        let url_path = validated_path(&guide.path, &node)?;

        let section = sections
            .get(guide.section_id.as_str())
            .ok_or_else(|| BuildError::UnknownSection {
                path: guide.path.clone(),
                section_id: guide.section_id.clone(),
            })?;

        let siblings: Vec<GuideLink> = section
            .guides
            .iter()
            .map(|g| GuideLink {
                title: g.title.clone(),
                path: normalize_url_path(&g.path),
                active: g.path == guide.path,
            })
            .collect();

        let position = siblings.iter().position(|g| g.active);
        let previous = position
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| siblings.get(i))
            .map(inactive);
        let next = position
            .and_then(|i| siblings.get(i + 1))
            .map(inactive);

        let breadcrumbs = vec![
            Breadcrumb {
                title: "Home".to_owned(),
                path: "/".to_owned(),
            },
            Breadcrumb {
                title: section.name.clone(),
                path: siblings
                    .first()
                    .map_or_else(|| "/".to_owned(), |g| g.path.clone()),
            },
        ];

        let document = documents_by_path.get(&url_path);

        Ok(PageDescriptor {
            url_path: url_path.clone(),
            template: TemplateId::Guide,
            context: PageContext::Guide(GuideContext {
                title: guide.title.clone(),
                path: url_path,
                section: SectionRef {
                    id: section.id.clone(),
                    name: section.name.clone(),
                },
                siblings,
                previous,
                next,
                breadcrumbs,
                frontmatter: document.map(|d| self.schema.resolve(&d.frontmatter)),
                body: document.map(|d| d.body.clone()),
            }),
        })
    }

    fn document_page(&self, doc: &Document) -> Result<PageDescriptor, BuildError> {
        let node = format!("document \"{}\"", doc.id);
        let url_path = validated_path(doc.frontmatter.path.as_deref().unwrap_or_default(), &node)?;
        let frontmatter = self.schema.resolve(&doc.frontmatter);

        Ok(PageDescriptor {
            url_path,
            template: TemplateId::Document,
            context: PageContext::Document(DocumentContext {
                id: doc.id.clone(),
                title: doc.frontmatter.title.clone().unwrap_or_else(|| doc.id.clone()),
                frontmatter,
                body: doc.body.clone(),
            }),
        })
    }
}

fn inactive(link: &GuideLink) -> GuideLink {
    GuideLink {
        active: false,
        ..link.clone()
    }
}

/// Canonical URL path: leading slash, no trailing slash (except the root).
fn normalize_url_path(path: &str) -> String {
    let path = path.trim().trim_end_matches('/');
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

fn validated_path(path: &str, node: &str) -> Result<String, BuildError> {
    if path.trim().is_empty() {
        return Err(BuildError::MissingPath {
            node: node.to_owned(),
        });
    }
    if path.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(BuildError::InvalidPath {
            node: node.to_owned(),
            path: path.to_owned(),
        });
    }
    Ok(normalize_url_path(path))
}

fn check_unique_paths(pages: &[PageDescriptor]) -> Result<(), BuildError> {
    let mut seen: HashMap<&str, &PageDescriptor> = HashMap::with_capacity(pages.len());
    for page in pages {
        if let Some(first) = seen.insert(&page.url_path, page) {
            return Err(BuildError::DuplicatePath {
                url_path: page.url_path.clone(),
                first: first.context.title().to_owned(),
                second: page.context.title().to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::PageBuilder: Send, Sync);

    use devcenter_storage::{Frontmatter, MockStore};
    use pretty_assertions::assert_eq;

    use super::*;

    fn frontmatter(path: Option<&str>, title: &str, author: Option<&str>) -> Frontmatter {
        Frontmatter {
            title: Some(title.to_owned()),
            path: path.map(str::to_owned),
            author: author.map(str::to_owned),
            extra: serde_json::Map::new(),
        }
    }

    fn build(store: MockStore) -> Result<PageRegistry, BuildError> {
        let builder = PageBuilder::new(Arc::new(store));
        let mut registry = PageRegistry::new();
        builder.build(&mut registry)?;
        Ok(registry)
    }

    fn guide_context(page: &PageDescriptor) -> &GuideContext {
        match &page.context {
            PageContext::Guide(ctx) => ctx,
            PageContext::Document(_) => panic!("expected guide context"),
        }
    }

    #[test]
    fn test_guide_page_with_siblings() {
        let store = MockStore::new().with_section(
            "auth",
            "Authentication",
            &[("/auth/intro", "Introduction"), ("/auth/tokens", "Tokens")],
        );

        let registry = build(store).unwrap();
        let page = registry.get("/auth/intro").unwrap();
        let ctx = guide_context(page);

        assert_eq!(page.template, TemplateId::Guide);
        assert_eq!(ctx.section.name, "Authentication");
        assert_eq!(
            ctx.siblings,
            vec![
                GuideLink {
                    title: "Introduction".to_owned(),
                    path: "/auth/intro".to_owned(),
                    active: true,
                },
                GuideLink {
                    title: "Tokens".to_owned(),
                    path: "/auth/tokens".to_owned(),
                    active: false,
                },
            ]
        );
        assert!(ctx.previous.is_none());
        assert_eq!(ctx.next.as_ref().map(|g| g.path.as_str()), Some("/auth/tokens"));
    }

    #[test]
    fn test_one_page_per_guide_at_declared_path() {
        let store = MockStore::new()
            .with_section("auth", "Authentication", &[("/auth/intro", "Intro"), ("/auth/tokens", "Tokens")])
            .with_section("orders", "Orders", &[("/orders/intro", "Intro")]);

        let registry = build(store).unwrap();
        let paths: Vec<&str> = registry.pages().iter().map(|p| p.url_path.as_str()).collect();

        assert_eq!(paths, vec!["/auth/intro", "/auth/tokens", "/orders/intro"]);
    }

    #[test]
    fn test_previous_and_next_links() {
        let store = MockStore::new().with_section(
            "auth",
            "Authentication",
            &[("/a", "A"), ("/b", "B"), ("/c", "C")],
        );

        let registry = build(store).unwrap();
        let ctx = guide_context(registry.get("/b").unwrap());

        assert_eq!(ctx.previous.as_ref().map(|g| g.title.as_str()), Some("A"));
        assert_eq!(ctx.next.as_ref().map(|g| g.title.as_str()), Some("C"));
        assert!(!ctx.previous.as_ref().unwrap().active);
    }

    #[test]
    fn test_breadcrumbs_home_then_section() {
        let store = MockStore::new().with_section(
            "auth",
            "Authentication",
            &[("/auth/intro", "Intro"), ("/auth/tokens", "Tokens")],
        );

        let registry = build(store).unwrap();
        let ctx = guide_context(registry.get("/auth/tokens").unwrap());

        assert_eq!(ctx.breadcrumbs[0].title, "Home");
        assert_eq!(ctx.breadcrumbs[1].title, "Authentication");
        assert_eq!(ctx.breadcrumbs[1].path, "/auth/intro");
    }

    #[test]
    fn test_guide_path_gets_leading_slash() {
        let store = MockStore::new().with_section("auth", "Authentication", &[("auth/intro", "Intro")]);

        let registry = build(store).unwrap();

        assert!(registry.get("/auth/intro").is_some());
    }

    #[test]
    fn test_guide_backed_by_document() {
        let store = MockStore::new()
            .with_section("auth", "Authentication", &[("/auth/intro", "Intro")])
            .with_author("a1", "Ada")
            .with_document(
                "auth/intro",
                frontmatter(Some("/auth/intro"), "Intro", Some("a1")),
                "# Intro\n",
            );

        let registry = build(store).unwrap();
        let ctx = guide_context(registry.get("/auth/intro").unwrap());

        assert_eq!(registry.len(), 1);
        assert_eq!(ctx.body.as_deref(), Some("# Intro\n"));
        let author = ctx.frontmatter.as_ref().and_then(|f| f.author.as_ref());
        assert_eq!(author.map(|a| a.name.as_str()), Some("Ada"));
    }

    #[test]
    fn test_standalone_document_page() {
        let store = MockStore::new().with_author("a1", "Ada").with_document(
            "blog/hello",
            frontmatter(Some("/blog/hello"), "Hello", Some("a1")),
            "Hi",
        );

        let registry = build(store).unwrap();
        let page = registry.get("/blog/hello").unwrap();

        assert_eq!(page.template, TemplateId::Document);
        let PageContext::Document(ctx) = &page.context else {
            panic!("expected document context");
        };
        assert_eq!(ctx.title, "Hello");
        assert_eq!(ctx.frontmatter.author.as_ref().map(|a| a.id.as_str()), Some("a1"));
    }

    #[test]
    fn test_document_with_unknown_author_still_builds() {
        let store = MockStore::new().with_document(
            "blog/hello",
            frontmatter(Some("/blog/hello"), "Hello", Some("ghost")),
            "Hi",
        );

        let registry = build(store).unwrap();
        let PageContext::Document(ctx) = &registry.get("/blog/hello").unwrap().context else {
            panic!("expected document context");
        };

        assert!(ctx.frontmatter.author.is_none());
    }

    #[test]
    fn test_guide_without_path_fails() {
        let store = MockStore::new().with_section("auth", "Authentication", &[("", "Orphan")]);

        let err = build(store).unwrap_err();

        assert!(matches!(err, BuildError::MissingPath { .. }));
        assert!(err.to_string().contains("Orphan"));
    }

    #[test]
    fn test_document_without_path_fails() {
        let store = MockStore::new().with_document("notes", frontmatter(None, "Notes", None), "x");

        let err = build(store).unwrap_err();

        assert_eq!(err.to_string(), "document \"notes\" has no path");
    }

    #[test]
    fn test_dangling_section_reference_fails() {
        let store = MockStore::new().with_raw_section(Section {
            id: "auth".to_owned(),
            name: "Authentication".to_owned(),
            guides: vec![Guide {
                path: "/auth/intro".to_owned(),
                title: "Intro".to_owned(),
                section_id: "missing".to_owned(),
            }],
        });

        let err = build(store).unwrap_err();

        assert!(matches!(
            err,
            BuildError::UnknownSection { ref section_id, .. } if section_id == "missing"
        ));
    }

    #[test]
    fn test_duplicate_paths_fail() {
        let store = MockStore::new()
            .with_section("auth", "Authentication", &[("/intro", "Auth Intro")])
            .with_section("orders", "Orders", &[("/intro", "Orders Intro")]);

        let err = build(store).unwrap_err();

        assert!(matches!(err, BuildError::DuplicatePath { ref url_path, .. } if url_path == "/intro"));
    }

    #[test]
    fn test_documents_sharing_guide_path_fail() {
        let store = MockStore::new()
            .with_section("auth", "Authentication", &[("/auth/intro", "Intro")])
            .with_document("a", frontmatter(Some("/auth/intro"), "A", None), "a")
            .with_document("b", frontmatter(Some("/auth/intro"), "B", None), "b");

        let err = build(store).unwrap_err();

        match err {
            BuildError::DuplicatePath {
                url_path,
                first,
                second,
            } => {
                assert_eq!(url_path, "/auth/intro");
                assert_eq!(first, "document \"a\"");
                assert_eq!(second, "document \"b\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_slash_is_same_page() {
        let store = MockStore::new()
            .with_section("auth", "Authentication", &[("/auth/intro", "Intro")])
            .with_document("intro", frontmatter(Some("/auth/intro/"), "Intro", None), "Body");

        let registry = build(store).unwrap();
        let paths: Vec<&str> = registry.pages().iter().map(|p| p.url_path.as_str()).collect();

        assert_eq!(paths, vec!["/auth/intro"]);
        let ctx = guide_context(registry.get("/auth/intro").unwrap());
        assert_eq!(ctx.body.as_deref(), Some("Body"));
    }

    #[test]
    fn test_trailing_slash_duplicates_fail() {
        let store = MockStore::new()
            .with_section("a", "A", &[("/x", "X")])
            .with_section("b", "B", &[("/x/", "Also X")]);

        assert!(matches!(
            build(store),
            Err(BuildError::DuplicatePath { url_path, .. }) if url_path == "/x"
        ));
    }

    #[test]
    fn test_normalize_url_path() {
        assert_eq!(normalize_url_path("auth/intro/"), "/auth/intro");
        assert_eq!(normalize_url_path(" /auth/intro "), "/auth/intro");
        assert_eq!(normalize_url_path("/"), "/");
        assert_eq!(normalize_url_path("//"), "/");
    }

    #[test]
    fn test_parent_segments_rejected() {
        let store = MockStore::new().with_section("auth", "Authentication", &[("/../etc", "Escape")]);

        assert!(matches!(build(store), Err(BuildError::InvalidPath { .. })));
    }

    #[test]
    fn test_failed_build_registers_nothing() {
        let store = MockStore::new()
            .with_section("auth", "Authentication", &[("/auth/intro", "Intro")])
            .with_section("broken", "Broken", &[("", "Orphan")]);
        let builder = PageBuilder::new(Arc::new(store));
        let mut registry = PageRegistry::new();

        assert!(builder.build(&mut registry).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_store_error_propagates() {
        let err = build(MockStore::new().failing()).unwrap_err();
        assert!(matches!(err, BuildError::Store(_)));
    }

    #[test]
    fn test_summary_counts() {
        let store = MockStore::new()
            .with_section("auth", "Authentication", &[("/auth/intro", "Intro")])
            .with_document("blog/a", frontmatter(Some("/blog/a"), "A", None), "")
            .with_document("blog/b", frontmatter(Some("/blog/b"), "B", None), "");
        let builder = PageBuilder::new(Arc::new(store));
        let mut registry = PageRegistry::new();

        let summary = builder.build(&mut registry).unwrap();

        assert_eq!(summary, BuildSummary { guides: 1, documents: 2 });
        assert_eq!(summary.total(), registry.len());
    }

    #[test]
    fn test_find_active_section() {
        let sections = vec![
            Section {
                id: "auth".to_owned(),
                name: "Authentication".to_owned(),
                guides: vec![Guide {
                    path: "/auth/intro".to_owned(),
                    title: "Intro".to_owned(),
                    section_id: "auth".to_owned(),
                }],
            },
            Section {
                id: "orders".to_owned(),
                name: "Orders".to_owned(),
                guides: vec![Guide {
                    path: "/orders/intro".to_owned(),
                    title: "Intro".to_owned(),
                    section_id: "orders".to_owned(),
                }],
            },
        ];

        assert_eq!(find_active_section(&sections, "/orders/intro"), Some(1));
        assert_eq!(find_active_section(&sections, "/auth/intro/"), Some(0));
        assert_eq!(find_active_section(&sections, "/nowhere"), None);
    }

    #[test]
    fn test_descriptor_serialization() {
        let store = MockStore::new().with_section("auth", "Authentication", &[("/auth/intro", "Intro")]);
        let registry = build(store).unwrap();

        let json = serde_json::to_value(registry.pages()).unwrap();

        assert_eq!(json[0]["urlPath"], "/auth/intro");
        assert_eq!(json[0]["template"], "guide");
        assert_eq!(json[0]["context"]["kind"], "guide");
        assert_eq!(json[0]["context"]["section"]["id"], "auth");
    }
}

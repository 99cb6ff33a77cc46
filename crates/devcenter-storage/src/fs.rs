//! Filesystem content store.
//!
//! Layout under the source directory:
//!
//! ```text
//! content/
//! ├── sections/        one section per JSON file (or an array)
//! ├── authors.json     author records (object or array)
//! ├── authors/         more author records
//! └── docs/            Markdown/MDX documents with frontmatter
//! ```
//!
//! Everything is read once by [`FsStore::open`]. Hidden files and
//! directories are skipped. A missing source directory is an empty site.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::frontmatter::split_frontmatter;
use crate::model::{Author, Document, Node, NodeKind, Section};
use crate::store::{ContentStore, StoreError};

const BACKEND: &str = "Fs";

/// Extensions recognised as documents.
const DOCUMENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// A JSON file holding either one record or a list of records.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Content store backed by a directory tree.
#[derive(Debug)]
pub struct FsStore {
    source_dir: PathBuf,
    sections: Vec<Section>,
    authors: Vec<Author>,
    author_index: HashMap<String, usize>,
    documents: Vec<Document>,
}

impl FsStore {
    /// Load all content under `source_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when a file cannot be read or parsed.
    pub fn open(source_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let source_dir = source_dir.into();

        let sections: Vec<Section> = load_collection(&source_dir, "sections")?
            .into_iter()
            .map(Section::with_guide_owners)
            .collect();
        let authors: Vec<Author> = load_collection(&source_dir, "authors")?;
        let documents = load_documents(&source_dir.join("docs"))?;

        let author_index = authors
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();

        tracing::debug!(
            source_dir = %source_dir.display(),
            sections = sections.len(),
            authors = authors.len(),
            documents = documents.len(),
            "Loaded content"
        );

        Ok(Self {
            source_dir,
            sections,
            authors,
            author_index,
            documents,
        })
    }

    /// Directory the content was loaded from.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

impl ContentStore for FsStore {
    fn sections(&self) -> Result<Vec<Section>, StoreError> {
        Ok(self.sections.clone())
    }

    fn authors(&self) -> Result<Vec<Author>, StoreError> {
        Ok(self.authors.clone())
    }

    fn documents(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self.documents.clone())
    }

    fn get_node_by_id(&self, id: &str, kind: NodeKind) -> Result<Option<Node>, StoreError> {
        let node = match kind {
            NodeKind::AuthorJson => self
                .author_index
                .get(id)
                .map(|&i| Node::Author(self.authors[i].clone())),
            NodeKind::Section => self
                .sections
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .map(Node::Section),
            NodeKind::Mdx => self
                .documents
                .iter()
                .find(|d| d.id == id)
                .cloned()
                .map(Node::Document),
        };
        Ok(node)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Read `<name>.json` and every `*.json` in `<name>/`, in that order.
///
/// Files inside the directory are read in filename order so content order
/// is stable across platforms.
fn load_collection<T: DeserializeOwned>(source_dir: &Path, name: &str) -> Result<Vec<T>, StoreError> {
    let mut items = Vec::new();

    let single = source_dir.join(format!("{name}.json"));
    if single.is_file() {
        items.extend(read_json::<OneOrMany<T>>(&single)?.into_vec());
    }

    let dir = source_dir.join(name);
    if dir.is_dir() {
        let mut files = list_dir(&dir)?
            .into_iter()
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == "json"))
            .collect::<Vec<_>>();
        files.sort();
        for file in files {
            items.extend(read_json::<OneOrMany<T>>(&file)?.into_vec());
        }
    }

    Ok(items)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StoreError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))?;
    serde_json::from_str(&content)
        .map_err(|e| StoreError::invalid_content(path, e).with_backend(BACKEND))
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    let entries =
        fs::read_dir(dir).map_err(|e| StoreError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND))?;
    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(e) => tracing::warn!(dir = %dir.display(), error = %e, "Skipping unreadable entry"),
        }
    }
    paths.retain(|path| !is_hidden(path));
    Ok(paths)
}

/// Two document files mapping to the same id (e.g., `a.md` and `a.mdx`).
#[derive(Debug, thiserror::Error)]
#[error("document id \"{id}\" is also defined by {}", .other.display())]
struct DuplicateDocumentId {
    id: String,
    other: PathBuf,
}

fn load_documents(docs_dir: &Path) -> Result<Vec<Document>, StoreError> {
    let mut documents = Vec::new();
    if docs_dir.is_dir() {
        scan_documents(docs_dir, "", &mut documents)?;
    }

    let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(documents.len());
    for doc in &documents {
        if let Some(other) = seen.insert(&doc.id, &doc.source_path) {
            let source = DuplicateDocumentId {
                id: doc.id.clone(),
                other: other.to_path_buf(),
            };
            return Err(StoreError::invalid_content(doc.source_path.clone(), source).with_backend(BACKEND));
        }
    }

    Ok(documents)
}

fn scan_documents(dir: &Path, prefix: &str, out: &mut Vec<Document>) -> Result<(), StoreError> {
    let mut paths = list_dir(dir)?;
    paths.sort();

    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if path.is_dir() {
            let child_prefix = join_id(prefix, name);
            scan_documents(&path, &child_prefix, out)?;
            continue;
        }

        let Some(stem) = document_stem(&path) else {
            continue;
        };
        out.push(read_document(&path, join_id(prefix, stem))?);
    }

    Ok(())
}

fn document_stem(path: &Path) -> Option<&str> {
    let ext = path.extension()?.to_str()?;
    if !DOCUMENT_EXTENSIONS.contains(&ext) {
        return None;
    }
    path.file_stem()?.to_str()
}

fn join_id(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}

fn read_document(path: &Path, id: String) -> Result<Document, StoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StoreError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))?;
    let (frontmatter, body) = split_frontmatter(&content)
        .map_err(|e| StoreError::invalid_content(path, e).with_backend(BACKEND))?;

    Ok(Document {
        id,
        source_path: path.to_path_buf(),
        frontmatter,
        body: body.to_owned(),
    })
}

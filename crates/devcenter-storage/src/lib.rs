//! Content model and content store abstraction for DevCenter.
//!
//! This crate provides the build-time content graph:
//!
//! - [`Section`], [`Guide`], [`Author`], [`Document`] and [`Frontmatter`]
//! - [`ContentStore`] trait with `sections()`, `authors()`, `documents()` and
//!   `get_node_by_id()`
//! - [`FsStore`] reading JSON records and Markdown/MDX files from a directory
//! - [`MockStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use devcenter_storage::{ContentStore, FsStore};
//!
//! let store = FsStore::open("content")?;
//! for section in store.sections()? {
//!     println!("{}: {} guides", section.name, section.guides.len());
//! }
//! ```

mod frontmatter;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod model;
mod store;

pub use frontmatter::FrontmatterError;
pub use fs::FsStore;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use model::{Author, Document, Frontmatter, Guide, Node, NodeKind, Section};
pub use store::{ContentStore, StoreError, StoreErrorKind};

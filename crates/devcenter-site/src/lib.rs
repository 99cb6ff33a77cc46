//! Schema customization, page building and static output for DevCenter.
//!
//! This crate provides:
//! - [`Schema`]: derived frontmatter fields (author resolution)
//! - [`PageBuilder`]: one [`PageDescriptor`] per guide and document
//! - [`write_site`]: static HTML pages plus a JSON manifest
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use std::sync::Arc;
//! use devcenter_site::{PageBuilder, PageRegistry, write_site};
//! use devcenter_storage::FsStore;
//!
//! let store = Arc::new(FsStore::open("content")?);
//! let mut registry = PageRegistry::new();
//! PageBuilder::new(store).build(&mut registry)?;
//! write_site(registry.pages(), Path::new("public"), "Developer Center")?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod html;
mod schema;

pub use builder::{
    Breadcrumb, BuildError, BuildSummary, DocumentContext, GuideContext, GuideLink, PageBuilder,
    PageContext, PageDescriptor, PageRegistry, PageRouter, SectionRef, TemplateId,
    find_active_section,
};
pub use html::{MANIFEST_FILENAME, render_page, write_site};
pub use schema::{FieldResolver, ResolvedFrontmatter, Schema};

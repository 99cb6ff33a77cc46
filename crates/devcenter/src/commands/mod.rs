//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod reference;
pub(crate) mod session;

pub(crate) use build::BuildArgs;
pub(crate) use reference::ReferenceArgs;
pub(crate) use session::SessionArgs;

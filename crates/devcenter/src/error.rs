//! CLI error types.

use devcenter_config::ConfigError;
use devcenter_reference::{ModelError, NavigationError};
use devcenter_site::BuildError;
use devcenter_storage::StoreError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Navigation(#[from] NavigationError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

//! `devcenter build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use devcenter_config::{CliSettings, Config};
use devcenter_site::{PageBuilder, PageRegistry, write_site};
use devcenter_storage::{ContentStore, FsStore};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover devcenter.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output (build progress logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(path = ?config.config_path, "Loaded configuration");

        let source_dir = &config.content_resolved.source_dir;
        let output_dir = &config.build_resolved.output_dir;
        output.field("Source", source_dir.display());
        output.field("Output", output_dir.display());

        let store: Arc<dyn ContentStore> = Arc::new(FsStore::open(source_dir.clone())?);
        let mut registry = PageRegistry::new();
        let summary = PageBuilder::new(store).build(&mut registry)?;

        if registry.is_empty() {
            output.warning("No content found; writing an empty site");
        }

        let written = write_site(
            registry.pages(),
            output_dir,
            &config.build_resolved.site_title,
        )?;

        output.success(&format!(
            "Built {written} pages ({} guides, {} documents) to {}",
            summary.guides,
            summary.documents,
            output_dir.display()
        ));
        Ok(())
    }
}

//! DevCenter CLI - Documentation engine.
//!
//! Provides commands for:
//! - `build`: Build routed pages and write the static site
//! - `session`: Decode session cookies into header state
//! - `reference`: Drive the API reference menu

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ReferenceArgs, SessionArgs};
use output::Output;

/// DevCenter - Documentation engine.
#[derive(Parser)]
#[command(name = "devcenter", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build pages from content and write the static site.
    Build(BuildArgs),
    /// Decode session cookies and print the header state.
    Session(SessionArgs),
    /// Apply reference menu selections and print the menu.
    Reference(ReferenceArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Session(args) => args.execute(),
        Commands::Reference(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

//! cli
//!
//! Command-line interface layer for gitform.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve file-config defaults against the flags
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Every command builds a configuration object and
//! hands it to [`crate::provider::Provider`], so CLI input goes through the
//! same validate → plan → execute lifecycle as any other configuration.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::config::FileConfig;
use crate::ui::Verbosity;

/// Flags and file-config defaults, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Context {
    /// Repository directory handed to the provider, if one was configured.
    /// `None` leaves the attribute absent so the schema default (`.`) fires.
    pub directory: Option<String>,
    /// Machine-readable JSON output.
    pub json: bool,
    /// Output verbosity.
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let base = cli.cwd.clone().unwrap_or_else(|| PathBuf::from("."));
    let file = FileConfig::load(&base).context("failed to load configuration")?;

    // Flags win over the file; the file only fills in what flags left unset.
    let directory = match (cli.cwd.as_ref(), file.directory()) {
        (Some(cwd), Some(dir)) => Some(cwd.join(dir).to_string_lossy().into_owned()),
        (Some(cwd), None) => Some(cwd.to_string_lossy().into_owned()),
        (None, Some(dir)) => Some(dir.to_string()),
        (None, None) => None,
    };

    let ctx = Context {
        directory,
        json: cli.json || file.json(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    commands::dispatch(cli.command, &ctx)
}

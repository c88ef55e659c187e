//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--json`: Machine-readable output
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//!
//! # Attribute Flags
//!
//! Flags that map onto provider attributes (`--kind`, `--scope`) are plain
//! strings here. The schema's validators own the allowed values, so a bad
//! value surfaces as a diagnostic, not a clap parse error.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gitform - Git repository state behind a Terraform-style plan lifecycle
#[derive(Parser, Debug)]
#[command(name = "gitform")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitform was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List branches
    #[command(
        long_about = "List branches.\n\n\
            Reads the `branches` data source. By default only local branches \
            are listed; `--kind remote` lists remote-tracking branches and \
            `--kind all` lists both."
    )]
    Branches {
        /// Which branches to list: local, remote, or all
        #[arg(long, value_name = "KIND")]
        kind: Option<String>,
    },

    /// List tags
    Tags,

    /// List configured remotes
    Remotes,

    /// Show a commit
    #[command(
        long_about = "Show a commit.\n\n\
            Resolves a revision spec (a ref, a tag, HEAD~2, a short OID) \
            through the `commit` data source and prints the commit's \
            metadata. Defaults to HEAD."
    )]
    Show {
        /// Revision spec to resolve
        #[arg(value_name = "REVISION")]
        revision: Option<String>,
    },

    /// Show working tree status
    Status {
        /// Leave untracked files out of the counts and listing
        #[arg(long)]
        no_untracked: bool,
    },

    /// Read git configuration for one scope
    Config {
        /// Which configuration file to read: local, global, system, or worktree
        #[arg(long, value_name = "SCOPE")]
        scope: Option<String>,
    },

    /// Stage files into the index
    Stage {
        /// Pathspecs to stage, relative to the repository root
        #[arg(required = true, value_name = "PATHS")]
        paths: Vec<String>,
    },

    /// Create a commit from the staged index
    Commit {
        /// The commit message
        #[arg(short, long)]
        message: String,

        /// Author name override; defaults to repository config
        #[arg(long, value_name = "NAME")]
        author_name: Option<String>,

        /// Author email override; defaults to repository config
        #[arg(long, value_name = "EMAIL")]
        author_email: Option<String>,

        /// Allow a commit whose tree matches its parent
        #[arg(long)]
        allow_empty: bool,
    },
}

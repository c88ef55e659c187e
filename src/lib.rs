//! Gitform - Git repository state behind a Terraform-style plan lifecycle
//!
//! Gitform exposes the state of an existing Git repository (branches, tags,
//! remotes, commits, status, config) as data sources, plus two mutating
//! resources (stage files, create a commit). Configuration flows through a
//! validate → plan → execute pipeline: attribute validators reject bad
//! values, plan modifiers fill in defaults, and only then does anything
//! touch the repository.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the provider)
//! - [`provider`] - Data source / resource registry and lifecycle glue
//! - [`plan`] - Pure validate and plan passes over a schema and a config value
//! - [`schema`] - Attribute declarations, validators, and plan modifiers
//! - [`value`] - The tri-state attribute value model
//! - [`diag`] - Attribute paths and accumulated diagnostics
//! - [`git`] - Single interface for all Git operations
//! - [`config`] - Optional CLI configuration file
//! - [`ui`] - User-facing output utilities
//!
//! # Correctness Invariants
//!
//! 1. No value reaches a data source or resource without passing validation
//! 2. Defaulting fires on explicit absence (null) only, never on a deferred value
//! 3. Failures on the provider surface travel as diagnostics, never panics
//! 4. All Git access flows through [`git::Git`]

pub mod cli;
pub mod config;
pub mod diag;
pub mod git;
pub mod plan;
pub mod provider;
pub mod schema;
pub mod ui;
pub mod value;

pub use diag::{AttributePath, Diagnostic, Diagnostics, Severity};
pub use provider::{DataSource, Provider, Resource};
pub use schema::{Attribute, Schema};
pub use value::{Value, ValueKind};

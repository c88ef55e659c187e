//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds a configuration object from its flags
//! 2. Runs it through the provider lifecycle (validate → plan → execute)
//! 3. Formats and displays the result
//!
//! Handlers never touch the repository directly, and they never validate
//! attribute values themselves: defaults and validators live in the schema,
//! so CLI input is checked exactly like any other configuration. A flag
//! that was not given is left out of the configuration entirely, which is
//! what lets the schema's defaults fire.

mod branches;
mod commit;
mod config_cmd;
mod remotes;
mod show;
mod stage;
mod status;
mod tags;

// Re-export command functions for testing and direct invocation
pub use branches::branches;
pub use commit::commit;
pub use config_cmd::config;
pub use remotes::remotes;
pub use show::show;
pub use stage::stage;
pub use status::status;
pub use tags::tags;

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::diag::{Diagnostics, Severity};
use crate::provider::Provider;
use crate::ui;
use crate::value::Value;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Branches { kind } => branches(ctx, kind.as_deref()),
        Command::Tags => tags(ctx),
        Command::Remotes => remotes(ctx),
        Command::Show { revision } => show(ctx, revision.as_deref()),
        Command::Status { no_untracked } => status(ctx, no_untracked),
        Command::Config { scope } => config(ctx, scope.as_deref()),
        Command::Stage { paths } => stage(ctx, paths),
        Command::Commit {
            message,
            author_name,
            author_email,
            allow_empty,
        } => commit(
            ctx,
            &message,
            author_name.as_deref(),
            author_email.as_deref(),
            allow_empty,
        ),
    }
}

/// Build the configuration object for one provider call.
///
/// Entries whose value is `None` are left out, not set to null, so the
/// schema sees genuine absence and its defaults fire.
fn build_config(ctx: &Context, entries: Vec<(&str, Option<Value>)>) -> Value {
    let mut object = Vec::new();
    if let Some(directory) = &ctx.directory {
        object.push(("directory".to_string(), Value::string(directory.clone())));
    }
    for (name, value) in entries {
        if let Some(value) = value {
            object.push((name.to_string(), value));
        }
    }
    Value::object(object)
}

/// Read a data source through the full lifecycle.
pub(crate) fn read(
    ctx: &Context,
    name: &str,
    entries: Vec<(&str, Option<Value>)>,
) -> Result<Value> {
    let config = build_config(ctx, entries);
    ui::debug(format!("read {} {}", name, config), ctx.verbosity);
    Provider::new()
        .read_data_source(name, &config)
        .map_err(report)
}

/// Apply a resource through the full lifecycle.
pub(crate) fn apply(
    ctx: &Context,
    name: &str,
    entries: Vec<(&str, Option<Value>)>,
) -> Result<Value> {
    let config = build_config(ctx, entries);
    ui::debug(format!("apply {} {}", name, config), ctx.verbosity);
    Provider::new()
        .apply_resource(name, &config)
        .map_err(report)
}

/// Render every diagnostic, one line each, then produce the process error.
fn report(diags: Diagnostics) -> anyhow::Error {
    let errors = diags
        .iter()
        .filter(|diag| diag.severity == Severity::Error)
        .count();
    for diag in diags.iter() {
        eprintln!("{}", diag);
    }
    anyhow::anyhow!(
        "{} diagnostic{} reported",
        errors,
        if errors == 1 { "" } else { "s" }
    )
}

/// Print a result value: JSON when requested, the command's own rendering
/// otherwise.
pub(crate) fn emit(ctx: &Context, value: &Value, render: impl FnOnce(&Value)) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        render(value);
    }
    Ok(())
}

/// Shorten an OID for human-readable listings.
pub(crate) fn short(oid: &str) -> &str {
    oid.get(..7).unwrap_or(oid)
}

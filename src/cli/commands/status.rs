//! status command - working tree status through the status data source

use anyhow::Result;

use super::{emit, read};
use crate::cli::Context;
use crate::ui;
use crate::value::Value;

/// Show working tree status.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `no_untracked` - Leave untracked files out of the counts and listing
pub fn status(ctx: &Context, no_untracked: bool) -> Result<()> {
    // Only an explicit --no-untracked overrides the schema default (true).
    let include = if no_untracked {
        Some(Value::Bool(false))
    } else {
        None
    };
    let result = read(ctx, "status", vec![("include_untracked", include)])?;

    emit(ctx, &result, |value| {
        let count = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_number)
                .and_then(serde_json::Number::as_u64)
                .unwrap_or(0)
        };

        // `clean` ignores untracked files; only report a wholly quiet tree
        // as clean.
        let clean = value.get("clean").and_then(Value::as_bool).unwrap_or(false);
        if clean && count("untracked") == 0 {
            ui::print("clean", ctx.verbosity);
        } else {
            ui::print(
                format!(
                    "staged: {}, unstaged: {}, untracked: {}, conflicted: {}",
                    count("staged"),
                    count("unstaged"),
                    count("untracked"),
                    count("conflicted"),
                ),
                ctx.verbosity,
            );
        }

        if let Some(operation) = value.get("operation").and_then(Value::as_str) {
            if operation != "clean" {
                ui::print(format!("operation in progress: {}", operation), ctx.verbosity);
            }
        }

        let Some(files) = value.get("files").and_then(Value::as_entries) else {
            return;
        };
        for (path, file) in files {
            let index = file.get("index").and_then(Value::as_str).unwrap_or("");
            let worktree = file.get("worktree").and_then(Value::as_str).unwrap_or("");
            ui::print(
                format!("  {:<10} {:<10} {}", index, worktree, path),
                ctx.verbosity,
            );
        }
    })
}

//! branches command - list branches through the branches data source

use anyhow::Result;

use super::{emit, read, short};
use crate::cli::Context;
use crate::ui;
use crate::value::Value;

/// List branches.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `kind` - Which branches to list; the schema's one-of validator owns
///   the allowed values
pub fn branches(ctx: &Context, kind: Option<&str>) -> Result<()> {
    let result = read(ctx, "branches", vec![("kind", kind.map(Value::string))])?;

    emit(ctx, &result, |value| {
        let Some(entries) = value.get("branches").and_then(Value::as_entries) else {
            return;
        };
        for (name, branch) in entries {
            let oid = branch.get("oid").and_then(Value::as_str).unwrap_or("");
            let head = branch
                .get("is_head")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let marker = if head { "*" } else { " " };

            let line = match branch.get("upstream").and_then(Value::as_str) {
                Some(upstream) => format!("{} {} {} -> {}", marker, short(oid), name, upstream),
                None => format!("{} {} {}", marker, short(oid), name),
            };
            ui::print(line, ctx.verbosity);
        }
    })
}

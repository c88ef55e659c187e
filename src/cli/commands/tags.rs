//! tags command - list tags through the tags data source

use anyhow::Result;

use super::{emit, read, short};
use crate::cli::Context;
use crate::ui;
use crate::value::Value;

/// List tags.
pub fn tags(ctx: &Context) -> Result<()> {
    let result = read(ctx, "tags", vec![])?;

    emit(ctx, &result, |value| {
        let Some(entries) = value.get("tags").and_then(Value::as_entries) else {
            return;
        };
        for (name, tag) in entries {
            let target = tag.get("target").and_then(Value::as_str).unwrap_or("");
            let annotated = tag
                .get("annotated")
                .and_then(Value::as_bool)
                .unwrap_or(false);

            let line = if annotated {
                format!("{} {} (annotated)", short(target), name)
            } else {
                format!("{} {}", short(target), name)
            };
            ui::print(line, ctx.verbosity);
        }
    })
}

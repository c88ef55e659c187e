//! remotes command - list remotes through the remotes data source

use anyhow::Result;

use super::{emit, read};
use crate::cli::Context;
use crate::ui;
use crate::value::Value;

/// List configured remotes.
pub fn remotes(ctx: &Context) -> Result<()> {
    let result = read(ctx, "remotes", vec![])?;

    emit(ctx, &result, |value| {
        let Some(entries) = value.get("remotes").and_then(Value::as_entries) else {
            return;
        };
        for (name, remote) in entries {
            let url = remote.get("url").and_then(Value::as_str).unwrap_or("");
            ui::print(format!("{} {}", name, url), ctx.verbosity);
            if let Some(push_url) = remote.get("push_url").and_then(Value::as_str) {
                ui::print(format!("{} {} (push)", name, push_url), ctx.verbosity);
            }
        }
    })
}

//! config command - read git configuration through the config data source

use anyhow::Result;

use super::{emit, read};
use crate::cli::Context;
use crate::ui;
use crate::value::Value;

/// Read git configuration entries for one scope.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `scope` - Which configuration file to read; the schema's one-of
///   validator owns the allowed values
pub fn config(ctx: &Context, scope: Option<&str>) -> Result<()> {
    let result = read(ctx, "config", vec![("scope", scope.map(Value::string))])?;

    emit(ctx, &result, |value| {
        let Some(entries) = value.get("entries").and_then(Value::as_entries) else {
            return;
        };
        for (key, entry) in entries {
            let entry = entry.as_str().unwrap_or("");
            ui::print(format!("{}={}", key, entry), ctx.verbosity);
        }
    })
}

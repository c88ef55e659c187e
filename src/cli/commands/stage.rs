//! stage command - add files to the index through the stage resource

use anyhow::Result;

use super::{apply, emit};
use crate::cli::Context;
use crate::ui;
use crate::value::Value;

/// Stage files into the index.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `paths` - Pathspecs to stage
pub fn stage(ctx: &Context, paths: Vec<String>) -> Result<()> {
    let paths = Value::List(paths.into_iter().map(Value::string).collect());
    let result = apply(ctx, "stage", vec![("paths", Some(paths))])?;

    emit(ctx, &result, |value| {
        let Some(staged) = value.get("staged").and_then(Value::as_items) else {
            return;
        };
        for path in staged.iter().filter_map(Value::as_str) {
            ui::print(format!("staged {}", path), ctx.verbosity);
        }
    })
}

//! commit command - create a commit through the commit resource

use anyhow::Result;

use super::{apply, emit, short};
use crate::cli::Context;
use crate::ui;
use crate::value::Value;

/// Create a commit from the staged index.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `message` - The full commit message
/// * `author_name` - Author name override
/// * `author_email` - Author email override
/// * `allow_empty` - Allow a commit whose tree matches its parent
pub fn commit(
    ctx: &Context,
    message: &str,
    author_name: Option<&str>,
    author_email: Option<&str>,
    allow_empty: bool,
) -> Result<()> {
    // `allow_empty` defaults to false in the schema; only an explicit flag
    // needs to be passed through.
    let result = apply(
        ctx,
        "commit",
        vec![
            ("message", Some(Value::string(message))),
            ("author_name", author_name.map(Value::string)),
            ("author_email", author_email.map(Value::string)),
            ("allow_empty", allow_empty.then_some(Value::Bool(true))),
        ],
    )?;

    emit(ctx, &result, |value| {
        let oid = value.get("oid").and_then(Value::as_str).unwrap_or("");
        let summary = value.get("summary").and_then(Value::as_str).unwrap_or("");
        ui::print(format!("[{}] {}", short(oid), summary), ctx.verbosity);
    })
}

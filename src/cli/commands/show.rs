//! show command - inspect a commit through the commit data source

use anyhow::Result;

use super::{emit, read};
use crate::cli::Context;
use crate::ui;
use crate::value::Value;

/// Show a commit.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `revision` - Revision spec to resolve (defaults to HEAD via the schema)
pub fn show(ctx: &Context, revision: Option<&str>) -> Result<()> {
    let result = read(
        ctx,
        "commit",
        vec![("revision", revision.map(Value::string))],
    )?;

    emit(ctx, &result, |value| {
        let field = |name: &str| value.get(name).and_then(Value::as_str).unwrap_or("");

        ui::print(format!("commit {}", field("oid")), ctx.verbosity);
        ui::print(
            format!("Author: {} <{}>", field("author_name"), field("author_email")),
            ctx.verbosity,
        );
        ui::print(format!("Date:   {}", field("author_time")), ctx.verbosity);
        ui::print("", ctx.verbosity);
        for line in field("message").lines() {
            ui::print(format!("    {}", line), ctx.verbosity);
        }
    })
}

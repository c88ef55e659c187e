//! commit resource - create a commit from the index

use crate::git::{CommitOptions, GitError};
use crate::provider::data::{directory_attribute, open_repo};
use crate::provider::Resource;
use crate::schema::{default_bool, non_empty_string, Attribute, Schema};
use crate::value::{Value, ValueKind};

/// Creates a commit from whatever is staged.
pub struct Commit;

impl Resource for Commit {
    fn name(&self) -> &'static str {
        "commit"
    }

    fn schema(&self) -> Schema {
        Schema::new("Create a commit from the staged index.")
            .attribute(directory_attribute())
            .attribute(
                Attribute::required("message", ValueKind::String)
                    .describe("The full commit message.")
                    .validator(non_empty_string()),
            )
            .attribute(
                Attribute::optional("author_name", ValueKind::String)
                    .describe("Author name override; defaults to repository config."),
            )
            .attribute(
                Attribute::optional("author_email", ValueKind::String)
                    .describe("Author email override; defaults to repository config."),
            )
            .attribute(
                Attribute::optional_computed("allow_empty", ValueKind::Bool)
                    .describe("Allow a commit whose tree matches its parent.")
                    .modifier(default_bool(false)),
            )
            .attribute(Attribute::computed("oid", ValueKind::String))
            .attribute(Attribute::computed("summary", ValueKind::String))
    }

    fn apply(&self, planned: &Value) -> Result<Value, GitError> {
        let git = open_repo(planned)?;

        let opts = CommitOptions {
            message: planned
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            author_name: planned
                .get("author_name")
                .and_then(Value::as_str)
                .map(String::from),
            author_email: planned
                .get("author_email")
                .and_then(Value::as_str)
                .map(String::from),
            allow_empty: planned
                .get("allow_empty")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        };

        let oid = git.create_commit(&opts)?;
        let info = git.commit_info(&oid)?;

        Ok(Value::object([
            (
                "directory".to_string(),
                planned.get("directory").cloned().unwrap_or(Value::Null),
            ),
            ("message".to_string(), Value::string(opts.message)),
            (
                "author_name".to_string(),
                planned.get("author_name").cloned().unwrap_or(Value::Null),
            ),
            (
                "author_email".to_string(),
                planned.get("author_email").cloned().unwrap_or(Value::Null),
            ),
            ("allow_empty".to_string(), Value::Bool(opts.allow_empty)),
            ("oid".to_string(), Value::string(info.oid.as_str())),
            ("summary".to_string(), Value::string(info.summary)),
        ]))
    }
}

//! commit data source - inspect one commit by revision spec

use super::{directory_attribute, open_repo};
use crate::git::GitError;
use crate::provider::DataSource;
use crate::schema::{Attribute, Schema};
use crate::value::{Value, ValueKind};

/// A single commit, resolved from a revision spec.
pub struct Commit;

impl DataSource for Commit {
    fn name(&self) -> &'static str {
        "commit"
    }

    fn schema(&self) -> Schema {
        Schema::new("A single commit, resolved from a revision spec.")
            .attribute(directory_attribute())
            .attribute(
                Attribute::optional_computed("revision", ValueKind::String)
                    .describe("Revision spec to resolve: a ref, a tag, HEAD~2, a short OID.")
                    .default_to(Value::string("HEAD")),
            )
            .attribute(Attribute::computed("oid", ValueKind::String))
            .attribute(Attribute::computed("summary", ValueKind::String))
            .attribute(Attribute::computed("message", ValueKind::String))
            .attribute(Attribute::computed("author_name", ValueKind::String))
            .attribute(Attribute::computed("author_email", ValueKind::String))
            .attribute(Attribute::computed("author_time", ValueKind::String))
            .attribute(Attribute::computed(
                "parents",
                ValueKind::list_of(ValueKind::String),
            ))
    }

    fn read(&self, planned: &Value) -> Result<Value, GitError> {
        let git = open_repo(planned)?;
        let revision = planned
            .get("revision")
            .and_then(Value::as_str)
            .unwrap_or("HEAD");

        let oid = git.revparse(revision)?;
        let info = git.commit_info(&oid)?;

        let parents = info
            .parents
            .iter()
            .map(|parent| Value::string(parent.as_str()))
            .collect();

        Ok(Value::object([
            (
                "directory".to_string(),
                planned.get("directory").cloned().unwrap_or(Value::Null),
            ),
            ("revision".to_string(), Value::string(revision)),
            ("oid".to_string(), Value::string(info.oid.as_str())),
            ("summary".to_string(), Value::string(info.summary)),
            ("message".to_string(), Value::string(info.message)),
            ("author_name".to_string(), Value::string(info.author_name)),
            ("author_email".to_string(), Value::string(info.author_email)),
            (
                "author_time".to_string(),
                Value::string(info.author_time.to_rfc3339()),
            ),
            ("parents".to_string(), Value::List(parents)),
        ]))
    }
}

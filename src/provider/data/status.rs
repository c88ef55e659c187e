//! status data source - working tree status and in-progress state

use std::collections::BTreeMap;

use super::{directory_attribute, open_repo};
use crate::git::GitError;
use crate::provider::DataSource;
use crate::schema::{default_bool, Attribute, Schema};
use crate::value::{Value, ValueKind};

/// Working tree status: change counts, per-file states, and whatever
/// operation (rebase, merge, ...) is in progress.
pub struct Status;

impl DataSource for Status {
    fn name(&self) -> &'static str {
        "status"
    }

    fn schema(&self) -> Schema {
        let file = ValueKind::object_of([
            ("index".to_string(), ValueKind::String),
            ("worktree".to_string(), ValueKind::String),
            ("conflicted".to_string(), ValueKind::Bool),
        ]);

        Schema::new("Working tree status of a repository.")
            .attribute(directory_attribute())
            .attribute(
                Attribute::optional_computed("include_untracked", ValueKind::Bool)
                    .describe("Whether untracked files are counted and listed.")
                    .modifier(default_bool(true)),
            )
            .attribute(Attribute::computed("clean", ValueKind::Bool))
            .attribute(Attribute::computed("staged", ValueKind::Number))
            .attribute(Attribute::computed("unstaged", ValueKind::Number))
            .attribute(Attribute::computed("untracked", ValueKind::Number))
            .attribute(Attribute::computed("conflicted", ValueKind::Number))
            .attribute(Attribute::computed("operation", ValueKind::String))
            .attribute(Attribute::computed("files", ValueKind::map_of(file)))
    }

    fn read(&self, planned: &Value) -> Result<Value, GitError> {
        let git = open_repo(planned)?;
        let include_untracked = planned
            .get("include_untracked")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        let status = git.status(include_untracked)?;

        let mut files = BTreeMap::new();
        for file in &status.files {
            files.insert(
                file.path.clone(),
                Value::object([
                    (
                        "index".to_string(),
                        Value::string(file.index.map_or("unchanged", |c| c.as_str())),
                    ),
                    (
                        "worktree".to_string(),
                        Value::string(file.worktree.map_or("unchanged", |c| c.as_str())),
                    ),
                    ("conflicted".to_string(), Value::Bool(file.conflicted)),
                ]),
            );
        }

        Ok(Value::object([
            (
                "directory".to_string(),
                planned.get("directory").cloned().unwrap_or(Value::Null),
            ),
            (
                "include_untracked".to_string(),
                Value::Bool(include_untracked),
            ),
            ("clean".to_string(), Value::Bool(status.is_clean())),
            ("staged".to_string(), Value::int(status.staged as i64)),
            ("unstaged".to_string(), Value::int(status.unstaged as i64)),
            ("untracked".to_string(), Value::int(status.untracked as i64)),
            (
                "conflicted".to_string(),
                Value::int(status.conflicted as i64),
            ),
            (
                "operation".to_string(),
                Value::string(git.state().to_string()),
            ),
            ("files".to_string(), Value::Map(files)),
        ]))
    }
}

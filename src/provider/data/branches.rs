//! branches data source - enumerate local and remote branches

use std::collections::BTreeMap;

use super::{directory_attribute, open_repo};
use crate::git::{BranchKind, GitError};
use crate::provider::DataSource;
use crate::schema::{one_of_strings, Attribute, Schema};
use crate::value::{Value, ValueKind};

/// Branches of a repository, keyed by name.
pub struct Branches;

impl DataSource for Branches {
    fn name(&self) -> &'static str {
        "branches"
    }

    fn schema(&self) -> Schema {
        let branch = ValueKind::object_of([
            ("oid".to_string(), ValueKind::String),
            ("is_head".to_string(), ValueKind::Bool),
            ("upstream".to_string(), ValueKind::String),
        ]);

        Schema::new("Branches of a repository, keyed by name.")
            .attribute(directory_attribute())
            .attribute(
                Attribute::optional_computed("kind", ValueKind::String)
                    .describe("Which branches to list: local, remote, or all.")
                    .validator(one_of_strings(&["local", "remote", "all"]))
                    .default_to(Value::string("local")),
            )
            .attribute(Attribute::computed("branches", ValueKind::map_of(branch)))
    }

    fn read(&self, planned: &Value) -> Result<Value, GitError> {
        let git = open_repo(planned)?;
        let kind = match planned.get("kind").and_then(Value::as_str) {
            Some("remote") => BranchKind::Remote,
            Some("all") => BranchKind::All,
            _ => BranchKind::Local,
        };

        let mut branches = BTreeMap::new();
        for entry in git.list_branches(kind)? {
            branches.insert(
                entry.name.to_string(),
                Value::object([
                    ("oid".to_string(), Value::string(entry.oid.as_str())),
                    ("is_head".to_string(), Value::Bool(entry.is_head)),
                    (
                        "upstream".to_string(),
                        entry.upstream.map_or(Value::Null, Value::string),
                    ),
                ]),
            );
        }

        Ok(Value::object([
            (
                "directory".to_string(),
                planned.get("directory").cloned().unwrap_or(Value::Null),
            ),
            (
                "kind".to_string(),
                planned.get("kind").cloned().unwrap_or(Value::Null),
            ),
            ("branches".to_string(), Value::Map(branches)),
        ]))
    }
}

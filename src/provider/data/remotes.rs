//! remotes data source - enumerate configured remotes

use std::collections::BTreeMap;

use super::{directory_attribute, open_repo};
use crate::git::GitError;
use crate::provider::DataSource;
use crate::schema::{Attribute, Schema};
use crate::value::{Value, ValueKind};

/// Remotes of a repository, keyed by name.
pub struct Remotes;

impl DataSource for Remotes {
    fn name(&self) -> &'static str {
        "remotes"
    }

    fn schema(&self) -> Schema {
        let remote = ValueKind::object_of([
            ("url".to_string(), ValueKind::String),
            ("push_url".to_string(), ValueKind::String),
        ]);

        Schema::new("Remotes of a repository, keyed by name.")
            .attribute(directory_attribute())
            .attribute(Attribute::computed("remotes", ValueKind::map_of(remote)))
    }

    fn read(&self, planned: &Value) -> Result<Value, GitError> {
        let git = open_repo(planned)?;

        let mut remotes = BTreeMap::new();
        for entry in git.list_remotes()? {
            remotes.insert(
                entry.name.clone(),
                Value::object([
                    (
                        "url".to_string(),
                        entry.url.map_or(Value::Null, Value::string),
                    ),
                    (
                        "push_url".to_string(),
                        entry.push_url.map_or(Value::Null, Value::string),
                    ),
                ]),
            );
        }

        Ok(Value::object([
            (
                "directory".to_string(),
                planned.get("directory").cloned().unwrap_or(Value::Null),
            ),
            ("remotes".to_string(), Value::Map(remotes)),
        ]))
    }
}

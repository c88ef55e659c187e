//! tags data source - enumerate tags

use std::collections::BTreeMap;

use super::{directory_attribute, open_repo};
use crate::git::GitError;
use crate::provider::DataSource;
use crate::schema::{Attribute, Schema};
use crate::value::{Value, ValueKind};

/// Tags of a repository, keyed by name.
pub struct Tags;

impl DataSource for Tags {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn schema(&self) -> Schema {
        let tag = ValueKind::object_of([
            ("target".to_string(), ValueKind::String),
            ("annotated".to_string(), ValueKind::Bool),
            ("message".to_string(), ValueKind::String),
        ]);

        Schema::new("Tags of a repository, keyed by name.")
            .attribute(directory_attribute())
            .attribute(Attribute::computed("tags", ValueKind::map_of(tag)))
    }

    fn read(&self, planned: &Value) -> Result<Value, GitError> {
        let git = open_repo(planned)?;

        let mut tags = BTreeMap::new();
        for entry in git.list_tags()? {
            tags.insert(
                entry.name.clone(),
                Value::object([
                    ("target".to_string(), Value::string(entry.target.as_str())),
                    ("annotated".to_string(), Value::Bool(entry.annotated)),
                    (
                        "message".to_string(),
                        entry.message.map_or(Value::Null, Value::string),
                    ),
                ]),
            );
        }

        Ok(Value::object([
            (
                "directory".to_string(),
                planned.get("directory").cloned().unwrap_or(Value::Null),
            ),
            ("tags".to_string(), Value::Map(tags)),
        ]))
    }
}

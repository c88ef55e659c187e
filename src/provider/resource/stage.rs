//! stage resource - add files to the index

use crate::git::GitError;
use crate::provider::data::{directory_attribute, open_repo};
use crate::provider::Resource;
use crate::schema::{non_empty_string, Attribute, Schema};
use crate::value::{Value, ValueKind};

/// Stages files matching the given pathspecs.
pub struct Stage;

impl Resource for Stage {
    fn name(&self) -> &'static str {
        "stage"
    }

    fn schema(&self) -> Schema {
        Schema::new("Stage files into the index.")
            .attribute(directory_attribute())
            .attribute(
                Attribute::required("paths", ValueKind::list_of(ValueKind::String))
                    .describe("Pathspecs to stage, relative to the repository root.")
                    .validator(non_empty_string()),
            )
            .attribute(Attribute::computed(
                "staged",
                ValueKind::list_of(ValueKind::String),
            ))
    }

    fn apply(&self, planned: &Value) -> Result<Value, GitError> {
        let git = open_repo(planned)?;

        let pathspecs: Vec<String> = planned
            .get("paths")
            .and_then(Value::as_items)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let staged = git.stage(&pathspecs)?;

        Ok(Value::object([
            (
                "directory".to_string(),
                planned.get("directory").cloned().unwrap_or(Value::Null),
            ),
            (
                "paths".to_string(),
                planned.get("paths").cloned().unwrap_or(Value::Null),
            ),
            (
                "staged".to_string(),
                Value::List(staged.into_iter().map(Value::string).collect()),
            ),
        ]))
    }
}

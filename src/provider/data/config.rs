//! config data source - read git configuration for one scope

use std::collections::BTreeMap;

use super::{directory_attribute, open_repo};
use crate::git::{ConfigScope, GitError};
use crate::provider::DataSource;
use crate::schema::{one_of_strings, Attribute, Schema};
use crate::value::{Value, ValueKind};

/// Configuration entries for one scope, keyed by name.
///
/// Multi-valued keys collapse to their last value here; the map shape keys
/// entries by name, and last-one-wins matches how git resolves them.
pub struct Config;

impl DataSource for Config {
    fn name(&self) -> &'static str {
        "config"
    }

    fn schema(&self) -> Schema {
        Schema::new("Git configuration entries for one scope, keyed by name.")
            .attribute(directory_attribute())
            .attribute(
                Attribute::optional_computed("scope", ValueKind::String)
                    .describe("Which configuration file to read.")
                    .validator(one_of_strings(&["local", "global", "system", "worktree"]))
                    .default_to(Value::string("local")),
            )
            .attribute(Attribute::computed(
                "entries",
                ValueKind::map_of(ValueKind::String),
            ))
    }

    fn read(&self, planned: &Value) -> Result<Value, GitError> {
        let git = open_repo(planned)?;
        let scope = match planned.get("scope").and_then(Value::as_str) {
            Some("global") => ConfigScope::Global,
            Some("system") => ConfigScope::System,
            Some("worktree") => ConfigScope::Worktree,
            _ => ConfigScope::Local,
        };

        let mut entries = BTreeMap::new();
        for (key, value) in git.config_entries(scope)? {
            entries.insert(key, Value::string(value));
        }

        Ok(Value::object([
            (
                "directory".to_string(),
                planned.get("directory").cloned().unwrap_or(Value::Null),
            ),
            (
                "scope".to_string(),
                planned.get("scope").cloned().unwrap_or(Value::Null),
            ),
            ("entries".to_string(), Value::Map(entries)),
        ]))
    }
}

//! provider::data
//!
//! Built-in data sources.
//!
//! Every data source declares a `directory` attribute (optional, defaulting
//! to `.`) naming where to discover the repository, plus its own inputs and
//! computed outputs. Reads are pure lookups: nothing here mutates the
//! repository.

mod branches;
mod commit;
mod config;
mod remotes;
mod status;
mod tags;

pub use branches::Branches;
pub use commit::Commit;
pub use config::Config;
pub use remotes::Remotes;
pub use status::Status;
pub use tags::Tags;

use std::path::Path;

use crate::git::{Git, GitError};
use crate::schema::Attribute;
use crate::value::{Value, ValueKind};

/// The `directory` attribute shared by every data source and resource.
pub(crate) fn directory_attribute() -> Attribute {
    Attribute::optional_computed("directory", ValueKind::String)
        .describe("Directory to discover the repository from; any subdirectory works.")
        .default_to(Value::string("."))
}

/// Open the repository named by a planned configuration's `directory`.
pub(crate) fn open_repo(planned: &Value) -> Result<Git, GitError> {
    let directory = planned
        .get("directory")
        .and_then(Value::as_str)
        .unwrap_or(".");
    Git::open(Path::new(directory))
}

//! provider
//!
//! Data source and resource registry.
//!
//! # Architecture
//!
//! A [`DataSource`] reads repository state; a [`Resource`] mutates it. Both
//! declare a [`Schema`] and receive a fully planned configuration object:
//! the [`Provider`] runs validate → plan → execute for every call, so by the
//! time `read` or `apply` runs, defaults are filled in and every validator
//! has passed.
//!
//! # Error Handling
//!
//! The provider surface reports failure exclusively through [`Diagnostics`]:
//! configuration problems come out of the validate and plan passes, and a
//! [`GitError`] raised during execution is converted into a single error
//! diagnostic. Nothing panics, nothing returns a bare Rust error.

pub mod data;
pub mod resource;

use crate::diag::{AttributePath, Diagnostics};
use crate::git::GitError;
use crate::plan;
use crate::schema::Schema;
use crate::value::Value;

/// Reads a slice of repository state.
pub trait DataSource {
    /// The name the data source is registered under.
    fn name(&self) -> &'static str;

    /// The attribute schema, including validators and defaults.
    fn schema(&self) -> Schema;

    /// Read state for a planned configuration.
    ///
    /// `planned` has passed validation and defaulting; the result is the
    /// full attribute object, computed attributes filled in.
    fn read(&self, planned: &Value) -> Result<Value, GitError>;
}

/// Applies a mutation to a repository.
pub trait Resource {
    /// The name the resource is registered under.
    fn name(&self) -> &'static str;

    /// The attribute schema, including validators and defaults.
    fn schema(&self) -> Schema;

    /// Apply the planned configuration.
    fn apply(&self, planned: &Value) -> Result<Value, GitError>;
}

/// Registry of data sources and resources.
///
/// # Example
///
/// ```
/// use gitform::provider::Provider;
/// use gitform::value::Value;
///
/// let provider = Provider::new();
/// let err = provider.read_data_source("nonsense", &Value::Null).unwrap_err();
/// assert!(err.has_errors());
/// ```
pub struct Provider {
    data_sources: Vec<Box<dyn DataSource>>,
    resources: Vec<Box<dyn Resource>>,
}

impl Provider {
    /// Build a provider with every built-in data source and resource.
    pub fn new() -> Self {
        Self {
            data_sources: vec![
                Box::new(data::Branches),
                Box::new(data::Tags),
                Box::new(data::Remotes),
                Box::new(data::Commit),
                Box::new(data::Status),
                Box::new(data::Config),
            ],
            resources: vec![Box::new(resource::Stage), Box::new(resource::Commit)],
        }
    }

    /// Names of all registered data sources.
    pub fn data_source_names(&self) -> Vec<&'static str> {
        self.data_sources.iter().map(|source| source.name()).collect()
    }

    /// Names of all registered resources.
    pub fn resource_names(&self) -> Vec<&'static str> {
        self.resources.iter().map(|resource| resource.name()).collect()
    }

    /// Run the full lifecycle for a data source read.
    ///
    /// Validates `config` against the data source's schema, plans it
    /// (applying defaults), and executes the read. Any failure along the
    /// way is returned as diagnostics.
    pub fn read_data_source(&self, name: &str, config: &Value) -> Result<Value, Diagnostics> {
        let source = self
            .data_sources
            .iter()
            .find(|source| source.name() == name)
            .ok_or_else(|| {
                unknown_name("unknown data source", name, &self.data_source_names())
            })?;

        let schema = source.schema();
        let planned = run_plan(&schema, config)?;
        execute(|| source.read(&planned))
    }

    /// Run the full lifecycle for a resource apply.
    pub fn apply_resource(&self, name: &str, config: &Value) -> Result<Value, Diagnostics> {
        let resource = self
            .resources
            .iter()
            .find(|resource| resource.name() == name)
            .ok_or_else(|| unknown_name("unknown resource", name, &self.resource_names()))?;

        let schema = resource.schema();
        let planned = run_plan(&schema, config)?;
        execute(|| resource.apply(&planned))
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate and plan a configuration, failing on any error diagnostic.
fn run_plan(schema: &Schema, config: &Value) -> Result<Value, Diagnostics> {
    let diags = plan::validate(schema, config);
    if diags.has_errors() {
        return Err(diags);
    }

    let (planned, mut diags) = plan::plan(schema, config);

    // Defaulting never touches required attributes, so re-check them on the
    // planned object before handing it to execution.
    for attr in schema.attributes() {
        if attr.mode().is_required() && planned.get(attr.name()).is_none_or(Value::is_null) {
            diags.error(
                AttributePath::root(attr.name()),
                "missing required attribute",
                format!("attribute {:?} must be set", attr.name()),
            );
        }
    }

    if diags.has_errors() {
        return Err(diags);
    }
    Ok(planned)
}

/// Run a read or apply, converting a [`GitError`] into one diagnostic.
fn execute<F>(operation: F) -> Result<Value, Diagnostics>
where
    F: FnOnce() -> Result<Value, GitError>,
{
    operation().map_err(|err| {
        let mut diags = Diagnostics::new();
        diags.error(
            AttributePath::empty(),
            "git operation failed",
            err.to_string(),
        );
        diags
    })
}

fn unknown_name(summary: &str, name: &str, known: &[&'static str]) -> Diagnostics {
    let mut diags = Diagnostics::new();
    diags.error(
        AttributePath::empty(),
        summary,
        format!("{:?} is not registered; known names: {}", name, known.join(", ")),
    );
    diags
}

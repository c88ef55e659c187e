//! diag
//!
//! Attribute paths and diagnostics.
//!
//! The provider surface never returns a Rust error: validators, plan
//! modifiers, and lifecycle passes append [`Diagnostic`] records to a
//! [`Diagnostics`] collection, and callers inspect the collection after the
//! call returns. Evaluation does not short-circuit on the first failure; a
//! single pass reports every violation it finds.

use std::fmt;

/// One step of an [`AttributePath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// A named attribute of a schema or object.
    Attribute(String),
    /// An element of a list or set.
    Index(usize),
    /// A value of a map, by key.
    Key(String),
}

/// Where in the configuration a diagnostic points.
///
/// Renders the way users write the configuration: `paths`, `paths[2]`,
/// `entries["user.name"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// The empty path, for diagnostics about the configuration as a whole.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A path starting at a named attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::Attribute(name.into())],
        }
    }

    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::Attribute(name.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::Index(index));
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(PathStep::Key(key.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attribute(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathStep::Index(index) => write!(f, "[{}]", index)?,
                PathStep::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A structured record surfaced to the user during validate or plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: AttributePath,
    pub summary: String,
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}: {}", self.severity, self.summary, self.detail)
        } else {
            write!(
                f,
                "{}: {}: {}: {}",
                self.severity, self.path, self.summary, self.detail
            )
        }
    }
}

/// An append-only collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.records.push(Diagnostic {
            severity: Severity::Error,
            path,
            summary: summary.into(),
            detail: detail.into(),
        });
    }

    pub fn warning(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.records.push(Diagnostic {
            severity: Severity::Warning,
            path,
            summary: summary.into(),
            detail: detail.into(),
        });
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.records.extend(other.records);
    }

    pub fn has_errors(&self) -> bool {
        self.records
            .iter()
            .any(|record| record.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

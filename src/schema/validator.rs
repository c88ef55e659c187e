//! schema::validator
//!
//! Attribute value validation.
//!
//! Validators run during the validate pass, before any plan modifier and
//! before anything touches a repository. A validator reads the configured
//! value and appends diagnostics; it never mutates the value and never
//! returns an error of its own.

use crate::diag::{AttributePath, Diagnostics};
use crate::value::Value;

/// Per-attribute validation request.
pub struct ValidateRequest<'a> {
    /// Path of the attribute being validated.
    pub path: &'a AttributePath,
    /// The configured value, tri-state.
    pub value: &'a Value,
}

/// Accumulated validation output.
#[derive(Default)]
pub struct ValidateResponse {
    pub diagnostics: Diagnostics,
}

/// Validates a configured attribute value.
pub trait ValueValidator {
    /// Human-readable description of the rule, for schema documentation.
    fn description(&self) -> String;

    /// Check `req.value`, appending any violations to `resp.diagnostics`.
    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse);
}

/// Rejects values outside a fixed allow-list.
///
/// Scalar attributes are checked directly; for a list or set every element
/// is checked, and for a map or object every value is checked (keys are
/// ignored). Null and unknown values are skipped entirely — absence and
/// deferral are never invalid by this rule. Each offending leaf produces
/// its own diagnostic; a single pass reports every violation.
///
/// Membership is pairwise value equality over the allow-list. The list is
/// captured at construction and never changes.
///
/// # Example
///
/// ```
/// use gitform::diag::{AttributePath, Diagnostics};
/// use gitform::schema::validator::{one_of_strings, ValidateRequest, ValidateResponse, ValueValidator};
/// use gitform::value::Value;
///
/// let validator = one_of_strings(&["local", "remote", "all"]);
/// let path = AttributePath::root("kind");
/// let value = Value::string("everything");
/// let mut resp = ValidateResponse::default();
/// validator.validate(&ValidateRequest { path: &path, value: &value }, &mut resp);
/// assert!(resp.diagnostics.has_errors());
/// ```
pub struct OneOf {
    allowed: Vec<Value>,
}

const ONE_OF_SUMMARY: &str = "invalid attribute value";

impl OneOf {
    fn render_allowed(&self) -> String {
        let rendered: Vec<String> = self.allowed.iter().map(ToString::to_string).collect();
        rendered.join(", ")
    }
}

impl ValueValidator for OneOf {
    fn description(&self) -> String {
        format!("value must be one of: {}", self.render_allowed())
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if !req.value.is_known() {
            return;
        }

        for (leaf_path, leaf) in leaves(req.path, req.value) {
            if !leaf.is_known() {
                continue;
            }
            if !self.allowed.iter().any(|allowed| allowed == leaf) {
                resp.diagnostics.error(
                    leaf_path,
                    ONE_OF_SUMMARY,
                    format!("value {} is not one of [{}]", leaf, self.render_allowed()),
                );
            }
        }
    }
}

/// Expand a value into the flat sequence of leaves to check.
///
/// Lists and sets contribute their elements, maps and objects their values.
/// Anything else is a single-element sequence of itself.
fn leaves<'v>(path: &AttributePath, value: &'v Value) -> Vec<(AttributePath, &'v Value)> {
    match value {
        Value::List(items) | Value::Set(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (path.clone().index(i), item))
            .collect(),
        Value::Map(entries) | Value::Object(entries) => entries
            .iter()
            .map(|(key, item)| (path.clone().key(key.clone()), item))
            .collect(),
        other => vec![(path.clone(), other)],
    }
}

/// Rejects empty strings.
///
/// Shares the one-of validator's leaf expansion: a scalar string is checked
/// directly, collection-shaped attributes check every element or value.
/// Non-string leaves are left to the schema's kind check.
pub struct NonEmptyString;

impl ValueValidator for NonEmptyString {
    fn description(&self) -> String {
        "value must not be empty".to_string()
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if !req.value.is_known() {
            return;
        }

        for (leaf_path, leaf) in leaves(req.path, req.value) {
            if leaf.as_str().is_some_and(str::is_empty) {
                resp.diagnostics.error(
                    leaf_path,
                    "invalid attribute value",
                    "value must not be empty",
                );
            }
        }
    }
}

/// Build a [`OneOf`] validator from an allow-list of values.
pub fn one_of(allowed: Vec<Value>) -> OneOf {
    OneOf { allowed }
}

/// Build a validator rejecting empty strings.
pub fn non_empty_string() -> NonEmptyString {
    NonEmptyString
}

/// Build a [`OneOf`] validator from an allow-list of strings.
pub fn one_of_strings(allowed: &[&str]) -> OneOf {
    OneOf {
        allowed: allowed.iter().map(|s| Value::string(*s)).collect(),
    }
}

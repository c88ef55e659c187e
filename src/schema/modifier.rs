//! schema::modifier
//!
//! Plan modifiers.
//!
//! Plan modifiers run during the plan pass, after validation. A modifier
//! reads the configured value and may overwrite the in-progress planned
//! value in place; the surrounding lifecycle reads the planned value back
//! out of the response. Modifiers are total functions: there is no error
//! path, no I/O, and the same configuration always yields the same
//! decision.

use crate::diag::{AttributePath, Diagnostics};
use crate::value::Value;

/// Per-attribute plan request.
pub struct PlanRequest<'a> {
    /// Path of the attribute being planned.
    pub path: &'a AttributePath,
    /// The configured value, tri-state.
    pub config: &'a Value,
}

/// In-progress planned value for one attribute.
pub struct PlanResponse {
    /// The planned value; modifiers overwrite this in place.
    pub plan: Value,
    pub diagnostics: Diagnostics,
}

/// Adjusts the planned value for an attribute.
pub trait PlanModifier {
    /// Human-readable description of the adjustment, for schema documentation.
    fn description(&self) -> String;

    /// Possibly rewrite `resp.plan` based on `req.config`.
    fn modify(&self, req: &PlanRequest<'_>, resp: &mut PlanResponse);
}

/// Supplies a default when the user left the attribute unset.
///
/// The default fires on explicit absence ([`Value::Null`]) only. An unknown
/// configuration value is deferred, not absent — the user expressed "this
/// comes from somewhere else" — so it is never overwritten. Concrete values
/// pass through untouched.
///
/// One generic implementation serves every attribute kind; the typed entry
/// points ([`default_bool`], [`default_string`]) exist so call sites read
/// naturally, not because the behavior differs.
///
/// # Example
///
/// ```
/// use gitform::diag::{AttributePath, Diagnostics};
/// use gitform::schema::modifier::{default_string, PlanModifier, PlanRequest, PlanResponse};
/// use gitform::value::Value;
///
/// let modifier = default_string("HEAD");
/// let path = AttributePath::root("revision");
/// let mut resp = PlanResponse { plan: Value::Null, diagnostics: Diagnostics::new() };
/// modifier.modify(&PlanRequest { path: &path, config: &Value::Null }, &mut resp);
/// assert_eq!(resp.plan, Value::string("HEAD"));
/// ```
pub struct DefaultValue {
    default: Value,
}

impl PlanModifier for DefaultValue {
    fn description(&self) -> String {
        format!("defaults to {}", self.default)
    }

    fn modify(&self, req: &PlanRequest<'_>, resp: &mut PlanResponse) {
        if req.config.is_null() {
            resp.plan = self.default.clone();
        }
    }
}

/// Build a [`DefaultValue`] modifier for any value.
pub fn default_value(default: Value) -> DefaultValue {
    DefaultValue { default }
}

/// Build a [`DefaultValue`] modifier for a boolean attribute.
pub fn default_bool(default: bool) -> DefaultValue {
    default_value(Value::Bool(default))
}

/// Build a [`DefaultValue`] modifier for a string attribute.
pub fn default_string(default: &str) -> DefaultValue {
    default_value(Value::string(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(modifier: &dyn PlanModifier, config: Value, plan: Value) -> Value {
        let path = AttributePath::root("attr");
        let mut resp = PlanResponse {
            plan,
            diagnostics: Diagnostics::new(),
        };
        modifier.modify(
            &PlanRequest {
                path: &path,
                config: &config,
            },
            &mut resp,
        );
        assert!(resp.diagnostics.is_empty());
        resp.plan
    }

    // The tri-state truth table: null takes the default, unknown and
    // concrete values pass through untouched.

    #[test]
    fn null_config_takes_the_default() {
        let modifier = default_bool(true);
        assert_eq!(run(&modifier, Value::Null, Value::Null), Value::Bool(true));
    }

    #[test]
    fn concrete_config_is_left_alone() {
        let modifier = default_bool(true);
        assert_eq!(
            run(&modifier, Value::Bool(false), Value::Bool(false)),
            Value::Bool(false)
        );
    }

    #[test]
    fn unknown_config_is_left_alone() {
        let modifier = default_bool(true);
        assert_eq!(
            run(&modifier, Value::Unknown, Value::Unknown),
            Value::Unknown
        );
    }

    #[test]
    fn string_default_entry_point() {
        let modifier = default_string("HEAD");
        assert_eq!(
            run(&modifier, Value::Null, Value::Null),
            Value::string("HEAD")
        );
        assert_eq!(
            run(&modifier, Value::string("main"), Value::string("main")),
            Value::string("main")
        );
    }

    #[test]
    fn generic_default_handles_collections() {
        let default = Value::list(vec![Value::string("a")]);
        let modifier = default_value(default.clone());
        assert_eq!(run(&modifier, Value::Null, Value::Null), default);
    }

    #[test]
    fn defaulting_is_deterministic() {
        let modifier = default_string("x");
        let first = run(&modifier, Value::Null, Value::Null);
        let second = run(&modifier, Value::Null, Value::Null);
        assert_eq!(first, second);
    }
}

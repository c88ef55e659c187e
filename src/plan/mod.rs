//! plan
//!
//! The validate and plan passes.
//!
//! Both passes are pure functions of a schema and a configuration value.
//! Validation accumulates diagnostics and never mutates the configuration;
//! planning produces the object that will be handed to a data source or
//! resource, with computed attributes marked unknown and plan modifiers
//! (defaults) applied. Attributes are processed independently: no ordering
//! dependency, no shared state.

use std::collections::BTreeMap;

use crate::diag::{AttributePath, Diagnostics};
use crate::schema::modifier::{PlanRequest, PlanResponse};
use crate::schema::validator::{ValidateRequest, ValidateResponse};
use crate::schema::Schema;
use crate::value::Value;

/// Validate a configuration object against a schema.
///
/// Checks, in order: the configuration is an object (or null, treated as
/// empty); every configured name is declared and accepts input; required
/// attributes are present; values conform to their declared kind; then each
/// attribute's validators run. All violations are reported in one pass.
pub fn validate(schema: &Schema, config: &Value) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let empty = BTreeMap::new();
    let entries = match config {
        Value::Object(entries) => entries,
        Value::Null => &empty,
        other => {
            diags.error(
                AttributePath::empty(),
                "invalid configuration",
                format!("expected an object, got {}", other.kind_name()),
            );
            return diags;
        }
    };

    for name in entries.keys() {
        match schema.get(name) {
            None => diags.error(
                AttributePath::root(name.clone()),
                "unsupported attribute",
                format!("attribute {:?} is not declared in the schema", name),
            ),
            Some(attr) if !attr.mode().accepts_input() => {
                if !entries[name].is_null() {
                    diags.error(
                        AttributePath::root(name.clone()),
                        "read-only attribute",
                        format!("attribute {:?} is computed and cannot be configured", name),
                    );
                }
            }
            Some(_) => {}
        }
    }

    for attr in schema.attributes() {
        let path = AttributePath::root(attr.name());
        let value = entries.get(attr.name()).cloned().unwrap_or(Value::Null);

        if attr.mode().is_required() && value.is_null() {
            diags.error(
                path,
                "missing required attribute",
                format!("attribute {:?} must be set", attr.name()),
            );
            continue;
        }

        if !value.conforms_to(attr.kind()) {
            diags.error(
                path,
                "type mismatch",
                format!("expected {}, got {}", attr.kind(), value.kind_name()),
            );
            continue;
        }

        let req = ValidateRequest {
            path: &path,
            value: &value,
        };
        let mut resp = ValidateResponse::default();
        for validator in attr.validators() {
            validator.validate(&req, &mut resp);
        }
        diags.extend(resp.diagnostics);
    }

    diags
}

/// Produce the planned object for a configuration.
///
/// Each attribute starts from its configured value (missing → null;
/// computed attributes with no configured value → unknown), then its plan
/// modifiers run in declaration order, each seeing the original configured
/// value and the planned value left by its predecessors.
pub fn plan(schema: &Schema, config: &Value) -> (Value, Diagnostics) {
    let mut diags = Diagnostics::new();
    let empty = BTreeMap::new();
    let entries = match config {
        Value::Object(entries) => entries,
        Value::Null => &empty,
        other => {
            diags.error(
                AttributePath::empty(),
                "invalid configuration",
                format!("expected an object, got {}", other.kind_name()),
            );
            return (Value::Null, diags);
        }
    };

    let mut planned = BTreeMap::new();
    for attr in schema.attributes() {
        let path = AttributePath::root(attr.name());
        let config_value = entries.get(attr.name()).cloned().unwrap_or(Value::Null);

        let initial = if config_value.is_null() && attr.mode().is_computed() {
            Value::Unknown
        } else {
            config_value.clone()
        };

        let req = PlanRequest {
            path: &path,
            config: &config_value,
        };
        let mut resp = PlanResponse {
            plan: initial,
            diagnostics: Diagnostics::new(),
        };
        for modifier in attr.modifiers() {
            modifier.modify(&req, &mut resp);
        }
        diags.extend(resp.diagnostics);
        planned.insert(attr.name().to_string(), resp.plan);
    }

    (Value::Object(planned), diags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{one_of_strings, Attribute};
    use crate::value::ValueKind;

    fn test_schema() -> Schema {
        Schema::new("test")
            .attribute(
                Attribute::optional_computed("directory", ValueKind::String)
                    .default_to(Value::string(".")),
            )
            .attribute(
                Attribute::optional_computed("kind", ValueKind::String)
                    .validator(one_of_strings(&["local", "remote", "all"]))
                    .default_to(Value::string("local")),
            )
            .attribute(Attribute::required("name", ValueKind::String))
            .attribute(Attribute::computed("oid", ValueKind::String))
    }

    fn config(entries: Vec<(&str, Value)>) -> Value {
        Value::object(entries.into_iter().map(|(k, v)| (k.to_string(), v)))
    }

    #[test]
    fn valid_config_passes() {
        let diags = validate(
            &test_schema(),
            &config(vec![("name", Value::string("x")), ("kind", Value::string("all"))]),
        );
        assert!(diags.is_empty(), "{:?}", diags);
    }

    #[test]
    fn missing_required_attribute_is_an_error() {
        let diags = validate(&test_schema(), &config(vec![]));
        assert!(diags.has_errors());
        assert!(diags
            .iter()
            .any(|d| d.summary == "missing required attribute" && d.path.to_string() == "name"));
    }

    #[test]
    fn undeclared_attribute_is_an_error() {
        let diags = validate(
            &test_schema(),
            &config(vec![("name", Value::string("x")), ("bogus", Value::Bool(true))]),
        );
        assert!(diags
            .iter()
            .any(|d| d.summary == "unsupported attribute" && d.path.to_string() == "bogus"));
    }

    #[test]
    fn configuring_a_computed_attribute_is_an_error() {
        let diags = validate(
            &test_schema(),
            &config(vec![("name", Value::string("x")), ("oid", Value::string("abc"))]),
        );
        assert!(diags.iter().any(|d| d.summary == "read-only attribute"));
    }

    #[test]
    fn type_mismatch_is_an_error() {
        let diags = validate(
            &test_schema(),
            &config(vec![("name", Value::Bool(true))]),
        );
        assert!(diags.iter().any(|d| d.summary == "type mismatch"));
    }

    #[test]
    fn non_object_config_is_rejected() {
        let diags = validate(&test_schema(), &Value::string("nope"));
        assert!(diags.has_errors());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn validators_run_against_configured_values() {
        let diags = validate(
            &test_schema(),
            &config(vec![
                ("name", Value::string("x")),
                ("kind", Value::string("everything")),
            ]),
        );
        assert!(diags.iter().any(|d| d.summary == "invalid attribute value"));
    }

    #[test]
    fn validation_reports_all_violations_in_one_pass() {
        let diags = validate(
            &test_schema(),
            &config(vec![("kind", Value::string("bogus"))]),
        );
        // Missing required `name` AND invalid `kind`.
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn plan_applies_defaults_for_absent_attributes() {
        let (planned, diags) = plan(&test_schema(), &config(vec![("name", Value::string("x"))]));
        assert!(diags.is_empty());
        assert_eq!(planned.get("directory"), Some(&Value::string(".")));
        assert_eq!(planned.get("kind"), Some(&Value::string("local")));
        assert_eq!(planned.get("name"), Some(&Value::string("x")));
    }

    #[test]
    fn plan_keeps_configured_values() {
        let (planned, _) = plan(
            &test_schema(),
            &config(vec![
                ("name", Value::string("x")),
                ("kind", Value::string("all")),
            ]),
        );
        assert_eq!(planned.get("kind"), Some(&Value::string("all")));
    }

    #[test]
    fn plan_marks_computed_attributes_unknown() {
        let (planned, _) = plan(&test_schema(), &config(vec![("name", Value::string("x"))]));
        assert_eq!(planned.get("oid"), Some(&Value::Unknown));
    }

    #[test]
    fn plan_does_not_default_unknown_values() {
        let (planned, _) = plan(
            &test_schema(),
            &config(vec![("name", Value::string("x")), ("kind", Value::Unknown)]),
        );
        assert_eq!(planned.get("kind"), Some(&Value::Unknown));
    }

    #[test]
    fn plan_is_idempotent_over_its_inputs() {
        let cfg = config(vec![("name", Value::string("x"))]);
        let schema = test_schema();
        assert_eq!(plan(&schema, &cfg), plan(&schema, &cfg));
    }
}

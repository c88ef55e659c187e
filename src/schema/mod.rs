//! schema
//!
//! Attribute declarations for data sources and resources.
//!
//! A [`Schema`] is an ordered set of [`Attribute`]s. Each attribute declares
//! its shape ([`ValueKind`]), its mode (required input, optional input,
//! computed output, or both), and optionally validators and plan modifiers.
//! Validators and modifiers are captured once at schema construction and are
//! immutable for the lifetime of the schema; every invocation is a pure
//! function of the value it is handed.

pub mod modifier;
pub mod validator;

pub use modifier::{default_bool, default_string, default_value, DefaultValue, PlanModifier};
pub use validator::{non_empty_string, one_of, one_of_strings, NonEmptyString, OneOf, ValueValidator};

use crate::value::{Value, ValueKind};

/// How an attribute participates in configuration and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Must be supplied in configuration.
    Required,
    /// May be supplied in configuration.
    Optional,
    /// Produced by the provider; rejected in configuration.
    Computed,
    /// May be supplied; filled in by the provider when absent.
    OptionalComputed,
}

impl AttributeMode {
    pub fn is_required(self) -> bool {
        matches!(self, AttributeMode::Required)
    }

    pub fn is_computed(self) -> bool {
        matches!(self, AttributeMode::Computed | AttributeMode::OptionalComputed)
    }

    /// Whether configuration may carry a value for this attribute.
    pub fn accepts_input(self) -> bool {
        !matches!(self, AttributeMode::Computed)
    }
}

/// A named, typed field of a data source's or resource's schema.
pub struct Attribute {
    name: String,
    kind: ValueKind,
    mode: AttributeMode,
    description: String,
    validators: Vec<Box<dyn ValueValidator>>,
    modifiers: Vec<Box<dyn PlanModifier>>,
}

impl Attribute {
    fn new(name: impl Into<String>, kind: ValueKind, mode: AttributeMode) -> Self {
        Self {
            name: name.into(),
            kind,
            mode,
            description: String::new(),
            validators: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    pub fn required(name: impl Into<String>, kind: ValueKind) -> Self {
        Self::new(name, kind, AttributeMode::Required)
    }

    pub fn optional(name: impl Into<String>, kind: ValueKind) -> Self {
        Self::new(name, kind, AttributeMode::Optional)
    }

    pub fn computed(name: impl Into<String>, kind: ValueKind) -> Self {
        Self::new(name, kind, AttributeMode::Computed)
    }

    pub fn optional_computed(name: impl Into<String>, kind: ValueKind) -> Self {
        Self::new(name, kind, AttributeMode::OptionalComputed)
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validator(mut self, validator: impl ValueValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn modifier(mut self, modifier: impl PlanModifier + 'static) -> Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    /// Shorthand for attaching a [`DefaultValue`] plan modifier.
    pub fn default_to(self, value: Value) -> Self {
        self.modifier(default_value(value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn mode(&self) -> AttributeMode {
        self.mode
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn validators(&self) -> &[Box<dyn ValueValidator>] {
        &self.validators
    }

    pub fn modifiers(&self) -> &[Box<dyn PlanModifier>] {
        &self.modifiers
    }
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("mode", &self.mode)
            .field("validators", &self.validators.len())
            .field("modifiers", &self.modifiers.len())
            .finish()
    }
}

/// The declared shape of one data source or resource.
#[derive(Debug, Default)]
pub struct Schema {
    description: String,
    attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_lookup_by_name() {
        let schema = Schema::new("test")
            .attribute(Attribute::optional("directory", ValueKind::String))
            .attribute(Attribute::computed("oid", ValueKind::String));

        assert!(schema.get("directory").is_some());
        assert!(schema.get("oid").is_some());
        assert!(schema.get("missing").is_none());
        assert_eq!(schema.attributes().len(), 2);
    }

    #[test]
    fn mode_queries() {
        assert!(AttributeMode::Required.is_required());
        assert!(!AttributeMode::Optional.is_required());
        assert!(AttributeMode::Computed.is_computed());
        assert!(AttributeMode::OptionalComputed.is_computed());
        assert!(!AttributeMode::Computed.accepts_input());
        assert!(AttributeMode::OptionalComputed.accepts_input());
    }
}

//! value
//!
//! The attribute value model.
//!
//! Every piece of configuration and every piece of repository state handled
//! by the provider is a [`Value`]: a tagged tri-state representation where
//! absence ([`Value::Null`]) and deferral ([`Value::Unknown`]) are enum
//! variants of their own, so match exhaustiveness covers every state the
//! planning lifecycle can produce.
//!
//! # Equality
//!
//! Equality is value-based and structurally recursive. [`Value::List`] is
//! positional; [`Value::Set`] compares as an unordered multiset. There is no
//! `Hash` implementation: values may be arbitrarily nested and membership
//! checks are done by pairwise equality.
//!
//! # Example
//!
//! ```
//! use gitform::value::Value;
//!
//! let a = Value::set(vec![Value::string("x"), Value::string("y")]);
//! let b = Value::set(vec![Value::string("y"), Value::string("x")]);
//! assert_eq!(a, b);
//!
//! assert!(Value::Null.is_null());
//! assert!(!Value::Unknown.is_known());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

pub use serde_json::Number;

/// A configuration or state value.
///
/// The two absence-like variants are distinct on purpose: `Null` means the
/// user wrote nothing, `Unknown` means the value exists but is deferred
/// until apply. Defaulting and validation treat them differently.
#[derive(Debug, Clone)]
pub enum Value {
    /// Explicit absence.
    Null,
    /// Deferred until apply.
    Unknown,
    Bool(bool),
    String(String),
    Number(Number),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Unordered collection.
    Set(Vec<Value>),
    /// String-keyed collection with a uniform element kind.
    Map(BTreeMap<String, Value>),
    /// Structured value with per-field kinds.
    Object(BTreeMap<String, Value>),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn int(n: i64) -> Self {
        Value::Number(Number::from(n))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    pub fn set(items: Vec<Value>) -> Self {
        Value::Set(items)
    }

    pub fn map(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Value::Map(entries.into_iter().collect())
    }

    pub fn object(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Value::Object(entries.into_iter().collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Neither null nor unknown.
    pub fn is_known(&self) -> bool {
        !matches!(self, Value::Null | Value::Unknown)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_entries(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(entries) | Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a field of an object (or map).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_entries().and_then(|entries| entries.get(name))
    }

    /// A short name for the value's shape, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Unknown => "unknown",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    /// Check the value's shape against a declared kind.
    ///
    /// Null and unknown conform to every kind; a deferred or absent value
    /// is never a type error. Collections check every element recursively.
    pub fn conforms_to(&self, kind: &ValueKind) -> bool {
        match (self, kind) {
            (Value::Null | Value::Unknown, _) => true,
            (Value::Bool(_), ValueKind::Bool) => true,
            (Value::String(_), ValueKind::String) => true,
            (Value::Number(_), ValueKind::Number) => true,
            (Value::List(items), ValueKind::List(elem))
            | (Value::Set(items), ValueKind::Set(elem)) => {
                items.iter().all(|item| item.conforms_to(elem))
            }
            (Value::Map(entries), ValueKind::Map(elem)) => {
                entries.values().all(|value| value.conforms_to(elem))
            }
            (Value::Object(entries), ValueKind::Object(fields)) => {
                entries.iter().all(|(name, value)| {
                    fields
                        .get(name)
                        .is_some_and(|field| value.conforms_to(field))
                })
            }
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Unknown, Value::Unknown) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => set_eq(a, b),
            (Value::Map(a), Value::Map(b)) | (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Unordered multiset equality: every element of `a` consumes a distinct
/// matching element of `b`.
fn set_eq(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut taken = vec![false; b.len()];
    'outer: for item in a {
        for (i, candidate) in b.iter().enumerate() {
            if !taken[i] && item == candidate {
                taken[i] = true;
                continue 'outer;
            }
        }
        return false;
    }
    true
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Unknown => write!(f, "(known after apply)"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::List(items) | Value::Set(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) | Value::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unknown only survives to output when a computed attribute was
            // never filled in; render it as null rather than invent a marker.
            Value::Null | Value::Unknown => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => n.serialize(serializer),
            Value::List(items) | Value::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) | Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Declared shape of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    String,
    Number,
    List(Box<ValueKind>),
    Set(Box<ValueKind>),
    Map(Box<ValueKind>),
    Object(BTreeMap<String, ValueKind>),
}

impl ValueKind {
    pub fn list_of(elem: ValueKind) -> Self {
        ValueKind::List(Box::new(elem))
    }

    pub fn set_of(elem: ValueKind) -> Self {
        ValueKind::Set(Box::new(elem))
    }

    pub fn map_of(elem: ValueKind) -> Self {
        ValueKind::Map(Box::new(elem))
    }

    pub fn object_of(fields: impl IntoIterator<Item = (String, ValueKind)>) -> Self {
        ValueKind::Object(fields.into_iter().collect())
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::List(elem) => write!(f, "list of {}", elem),
            ValueKind::Set(elem) => write!(f, "set of {}", elem),
            ValueKind::Map(elem) => write!(f, "map of {}", elem),
            ValueKind::Object(_) => write!(f, "object"),
        }
    }
}

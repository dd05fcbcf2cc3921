//! Typed extras attached to an inbound request.
//!
//! Reads follow the host platform's bundle semantics: asking for a key with
//! the wrong type yields the caller's default instead of an error.

use std::collections::BTreeMap;

use tracing::debug;

use super::REQUEST_TARGET;

/// A single extra value.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraValue {
    /// Text value.
    Text(String),
    /// Double-precision number.
    Double(f64),
    /// Single-precision number.
    Float(f32),
    /// 64-bit integer.
    Long(i64),
    /// Boolean flag.
    Bool(bool),
}

impl ExtraValue {
    /// Returns the type name used in logs and command-line syntax.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
            Self::Long(_) => "long",
            Self::Bool(_) => "bool",
        }
    }
}

/// Numeric accessors used by coordinate decoding.
///
/// [`Extras`] is the production implementation; tests substitute doubles to
/// observe which channel a decoder reads.
pub trait TypedExtras {
    /// Reads `key` as a double, or returns `default`.
    fn double_or(&self, key: &str, default: f64) -> f64;

    /// Reads `key` as a single-precision float, or returns `default`.
    fn float_or(&self, key: &str, default: f32) -> f32;
}

/// Named extras carried by an [`InboundRequest`](super::InboundRequest).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extras {
    values: BTreeMap<String, ExtraValue>,
}

impl Extras {
    /// Creates an empty extras set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: ExtraValue) {
        self.values.insert(key.into(), value);
    }

    /// Returns `true` when the key is present with any type.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the raw value for the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.values.get(key)
    }

    /// Reads `key` as text.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            ExtraValue::Text(value) => Some(value.as_str()),
            other => {
                type_mismatch(key, "string", other);
                None
            }
        }
    }

    /// Reads `key` as a boolean, or returns `default`.
    #[must_use]
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(ExtraValue::Bool(value)) => *value,
            Some(other) => {
                type_mismatch(key, "bool", other);
                default
            }
            None => default,
        }
    }

    /// Reads `key` as a 64-bit integer, or returns `default`.
    #[must_use]
    pub fn long_or(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(ExtraValue::Long(value)) => *value,
            Some(other) => {
                type_mismatch(key, "long", other);
                default
            }
            None => default,
        }
    }

    /// Returns the number of extras.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no extras are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TypedExtras for Extras {
    fn double_or(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(ExtraValue::Double(value)) => *value,
            Some(other) => {
                type_mismatch(key, "double", other);
                default
            }
            None => default,
        }
    }

    fn float_or(&self, key: &str, default: f32) -> f32 {
        match self.values.get(key) {
            Some(ExtraValue::Float(value)) => *value,
            Some(other) => {
                type_mismatch(key, "float", other);
                default
            }
            None => default,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, ExtraValue)> for Extras {
    fn from_iter<I: IntoIterator<Item = (K, ExtraValue)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

fn type_mismatch(key: &str, requested: &str, found: &ExtraValue) {
    debug!(
        target: REQUEST_TARGET,
        key,
        requested,
        found = found.type_name(),
        "extra read with mismatched type; using default"
    );
}

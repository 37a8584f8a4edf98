//! The bound argument map.
//!
//! Built by the binder for a single invocation and handed to the handler;
//! covers every declared parameter exactly once. Also carries the raw
//! token sequence that followed path resolution, so commands that declare
//! no parameters can inspect their input directly.

use std::collections::HashMap;

use herald_foundation::Value;

/// Coerced arguments for one command invocation, keyed by parameter id.
#[derive(Clone, Debug, Default)]
pub struct BoundArgs {
    values: HashMap<String, Value>,
    raw: Vec<String>,
}

impl BoundArgs {
    /// Creates a bound argument map from coerced values and the raw token
    /// sequence that followed path resolution.
    #[must_use]
    pub fn new(values: HashMap<String, Value>, raw: Vec<String>) -> Self {
        Self { values, raw }
    }

    /// Gets a bound value by parameter id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    /// Gets a bound string value.
    #[must_use]
    pub fn str(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Value::as_str)
    }

    /// Gets a bound integer value.
    #[must_use]
    pub fn int(&self, id: &str) -> Option<i64> {
        self.get(id).and_then(Value::as_int)
    }

    /// Gets a bound float value.
    #[must_use]
    pub fn float(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(Value::as_float)
    }

    /// Gets a bound boolean value.
    #[must_use]
    pub fn bool(&self, id: &str) -> Option<bool> {
        self.get(id).and_then(Value::as_bool)
    }

    /// Gets a bound list value.
    #[must_use]
    pub fn list(&self, id: &str) -> Option<&im::Vector<Value>> {
        self.get(id).and_then(Value::as_list)
    }

    /// Gets a bound set value.
    #[must_use]
    pub fn set(&self, id: &str) -> Option<&im::OrdSet<Value>> {
        self.get(id).and_then(Value::as_set)
    }

    /// The raw token sequence that followed path resolution, before any
    /// named/flag splitting or coercion.
    #[must_use]
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// Number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameters were bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates bound `(id, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value))
    }
}

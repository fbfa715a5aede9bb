//! `FieldAssignment`: one row's worth of `(column, value)` pairs.

use super::value::Value;

/// Ordered column/value pairs for a single insert.
///
/// Order is preserved into the built statement. Adding a name that is
/// already present replaces its value in place, so each column appears at
/// most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldAssignment {
    fields: Vec<(String, Value)>,
}

impl FieldAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `add`.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.add(name, value);
        self
    }

    pub fn add(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build from a JSON object. Non-object input yields an empty assignment.
    pub fn from_json(obj: &serde_json::Value) -> Self {
        let mut out = Self::new();
        if let Some(map) = obj.as_object() {
            for (k, v) in map {
                out.add(k, v.clone());
            }
        }
        out
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for FieldAssignment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.add(k.as_ref(), v);
        }
        out
    }
}

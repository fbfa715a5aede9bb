//! Equality constraints for reads: `(k==? OR k==?) AND (j==?)`.

use smallvec::{smallvec, SmallVec};

use super::value::Value;

/// The accepted values for one column. A bare scalar and a one-element
/// list are the same constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternatives(SmallVec<[Value; 1]>);

impl Alternatives {
    pub fn one(value: impl Into<Value>) -> Self {
        Self(smallvec![value.into()])
    }

    pub fn any_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered per-column constraints, ANDed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    entries: Vec<(String, Alternatives)>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain `name` to a single value.
    pub fn eq(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.add(name, Alternatives::one(value));
        self
    }

    /// Constrain `name` to any of `values`.
    pub fn any_of<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.add(name, Alternatives::any_of(values));
        self
    }

    /// Adding a name twice replaces the earlier alternatives.
    pub fn add(&mut self, name: &str, alternatives: Alternatives) -> &mut Self {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = alternatives,
            None => self.entries.push((name.to_string(), alternatives)),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Alternatives)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total placeholders this constraint set renders to.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|(_, a)| a.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_single_element_list_are_equal() {
        let a = Constraints::new().eq("id", 7);
        let b = Constraints::new().any_of("id", [7]);
        assert_eq!(a, b);
    }

    #[test]
    fn value_count_sums_alternatives() {
        let c = Constraints::new()
            .any_of("id", [1, 2, 3])
            .eq("tail", "N123");
        assert_eq!(c.len(), 2);
        assert_eq!(c.value_count(), 4);
    }

    #[test]
    fn empty_alternatives_are_representable() {
        let c = Constraints::new().any_of("id", Vec::<i64>::new());
        assert!(c.iter().next().unwrap().1.is_empty());
    }
}

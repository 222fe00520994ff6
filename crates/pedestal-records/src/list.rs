//! Scalar-or-list field normalization.

use serde::{Deserialize, Serialize};

/// A field that may be authored as a single value or a list of values.
///
/// Record authors write `"type": "Boolean"` and `"type": ["Boolean", "String"]`
/// interchangeably; renderers iterate either shape the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Iterate over the values, treating a scalar as a one-element list.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn iterates_scalar_as_single_element() {
        let one: OneOrMany<String> = OneOrMany::One("Boolean".to_string());

        assert_eq!(one.len(), 1);
        assert_eq!(one.iter().collect::<Vec<_>>(), vec!["Boolean"]);
    }

    #[test]
    fn iterates_list_in_order() {
        let many: OneOrMany<String> =
            OneOrMany::Many(vec!["Boolean".to_string(), "String".to_string()]);

        assert_eq!(many.len(), 2);
        assert_eq!(many.iter().collect::<Vec<_>>(), vec!["Boolean", "String"]);
    }

    #[test]
    fn deserializes_either_shape() {
        let one: OneOrMany<String> = serde_json::from_str("\"Boolean\"").unwrap();
        let many: OneOrMany<String> = serde_json::from_str("[\"Boolean\", \"String\"]").unwrap();

        assert_eq!(one, OneOrMany::One("Boolean".to_string()));
        assert_eq!(
            many,
            OneOrMany::Many(vec!["Boolean".to_string(), "String".to_string()])
        );
    }

    #[test]
    fn default_is_empty() {
        let empty: OneOrMany<String> = OneOrMany::default();

        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);
    }
}

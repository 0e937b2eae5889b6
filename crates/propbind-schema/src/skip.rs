use crate::SKIP_PREFIX;
use std::collections::BTreeSet;

///
/// SkipPolicy
///
/// Read-only set of `(type, property)` pairs whose bindings are suppressed.
/// Rules are keyed `skipAttribute.<qualified type>.<property>`; only the
/// value `true` suppresses.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SkipPolicy {
    keys: BTreeSet<String>,
}

impl SkipPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule key for a property of a type.
    #[must_use]
    pub fn key(type_name: &str, property: &str) -> String {
        format!("{SKIP_PREFIX}{type_name}.{property}")
    }

    /// Build from flattened `key = value` entries. Keys without the skip
    /// prefix are ignored, as is every value other than `true`.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let keys = entries
            .into_iter()
            .filter(|(key, value)| key.as_ref().starts_with(SKIP_PREFIX) && value.as_ref() == "true")
            .map(|(key, _)| key.as_ref().to_string())
            .collect();

        Self { keys }
    }

    #[must_use]
    pub fn with_rule(mut self, type_name: &str, property: &str) -> Self {
        self.keys.insert(Self::key(type_name, property));
        self
    }

    /// Union of both rule sets.
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        self.keys.extend(other.keys.iter().cloned());
        self
    }

    #[must_use]
    pub fn skips(&self, type_name: &str, property: &str) -> bool {
        self.keys.contains(&Self::key(type_name, property))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

///
/// TESTS
///

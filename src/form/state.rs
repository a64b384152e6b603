//! State for the form: one entry per field.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::key::FieldKey;
use crate::mvi::UiState;
use crate::value::FieldValue;

/// Insertion-ordered set of error messages.
///
/// Empty messages are never stored and duplicates collapse onto the first
/// occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorSet(Vec<String>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message. Returns `false` if it was empty or already present.
    pub fn insert(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if message.is_empty() || self.0.contains(&message) {
            return false;
        }
        self.0.push(message);
        true
    }

    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|m| m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Messages in insertion order, or `None` when there are none.
    pub fn to_messages(&self) -> Option<Vec<String>> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

impl Extend<String> for ErrorSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for message in iter {
            self.insert(message);
        }
    }
}

impl FromIterator<String> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        set.extend(iter);
        set
    }
}

/// Current value and errors of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    pub value: FieldValue,
    pub errors: ErrorSet,
}

impl FieldEntry {
    pub fn new(value: FieldValue) -> Self {
        Self {
            value,
            errors: ErrorSet::new(),
        }
    }
}

/// Immutable snapshot of every field.
///
/// Cloning is cheap: the map is shared. Transitions build a fresh map, so a
/// snapshot held by a reader keeps showing exactly what it showed when it
/// was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<K: Ord> {
    fields: Arc<BTreeMap<K, FieldEntry>>,
}

impl<K: Ord> Default for FormState<K> {
    fn default() -> Self {
        Self {
            fields: Arc::new(BTreeMap::new()),
        }
    }
}

impl<K: FieldKey> UiState for FormState<K> {}

impl<K: FieldKey> FormState<K> {
    pub(crate) fn from_fields(fields: BTreeMap<K, FieldEntry>) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }

    pub fn get(&self, key: &K) -> Option<&FieldEntry> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &FieldEntry)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of the field map, used by transitions to build the next state.
    pub(crate) fn to_fields(&self) -> BTreeMap<K, FieldEntry> {
        self.fields.as_ref().clone()
    }

    /// `true` if both snapshots share the same underlying map.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }
}

/// Build the initial state: every key gets its value and no errors.
pub fn initialize<K: FieldKey>(init: &BTreeMap<K, FieldValue>) -> FormState<K> {
    let fields = init
        .iter()
        .map(|(key, value)| (key.clone(), FieldEntry::new(value.clone())))
        .collect();
    FormState::from_fields(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_set_skips_empty_and_duplicates() {
        let mut set = ErrorSet::new();
        assert!(set.insert("a"));
        assert!(!set.insert(""));
        assert!(set.insert("b"));
        assert!(!set.insert("a"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn error_set_to_messages() {
        assert_eq!(ErrorSet::new().to_messages(), None);
        let set: ErrorSet = vec!["x".to_string(), "x".to_string()].into_iter().collect();
        assert_eq!(set.to_messages(), Some(vec!["x".to_string()]));
    }

    #[test]
    fn initialize_has_empty_errors() {
        let mut init = BTreeMap::new();
        init.insert("name", FieldValue::from("The builder"));
        init.insert("age", FieldValue::from(0));

        let state = initialize(&init);
        assert_eq!(state.len(), 2);
        for (key, entry) in state.iter() {
            assert_eq!(&entry.value, &init[key]);
            assert!(entry.errors.is_empty());
        }
    }

    #[test]
    fn default_is_empty() {
        assert!(FormState::<String>::default().is_empty());
    }
}

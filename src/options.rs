//! Manager options and the validator table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::FormSettings;
use crate::key::FieldKey;
use crate::value::FieldValue;

/// A custom validator: zero or more error messages for a candidate value.
pub type Validator = Arc<dyn Fn(&FieldValue) -> Option<Vec<String>> + Send + Sync>;

/// When the pristine phase ends and custom validators start running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationPolicy {
    /// The first update after construction or reset is a grace update.
    /// Validators run from the second update on.
    #[default]
    FirstUpdate,
    /// Validators run once a read cycle ([`FormManager::read`]) has
    /// completed, whether or not an update happened before it.
    ///
    /// [`FormManager::read`]: crate::FormManager::read
    FirstRead,
}

/// Per-field custom validators.
///
/// Fields without an entry simply have no custom validation.
pub struct ValidatorTable<K> {
    validators: BTreeMap<K, Validator>,
}

impl<K: FieldKey> ValidatorTable<K> {
    pub fn new() -> Self {
        Self {
            validators: BTreeMap::new(),
        }
    }

    /// Register a validator over any value kind.
    pub fn with<F>(mut self, key: K, validator: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<Vec<String>> + Send + Sync + 'static,
    {
        self.validators.insert(key, Arc::new(validator));
        self
    }

    /// Register a validator for a text field. Values of another kind pass.
    pub fn text<F>(self, key: K, validator: F) -> Self
    where
        F: Fn(&str) -> Option<Vec<String>> + Send + Sync + 'static,
    {
        self.with(key, move |value| value.as_str().and_then(&validator))
    }

    /// Register a validator for a numeric field. Values of another kind pass.
    pub fn number<F>(self, key: K, validator: F) -> Self
    where
        F: Fn(f64) -> Option<Vec<String>> + Send + Sync + 'static,
    {
        self.with(key, move |value| value.as_f64().and_then(&validator))
    }

    /// Register a validator for a boolean field. Values of another kind pass.
    pub fn boolean<F>(self, key: K, validator: F) -> Self
    where
        F: Fn(bool) -> Option<Vec<String>> + Send + Sync + 'static,
    {
        self.with(key, move |value| value.as_bool().and_then(&validator))
    }

    pub fn get(&self, key: &K) -> Option<&Validator> {
        self.validators.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.validators.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<K: FieldKey> Default for ValidatorTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for ValidatorTable<K> {
    fn clone(&self) -> Self {
        Self {
            validators: self.validators.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for ValidatorTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.validators.keys()).finish()
    }
}

/// Static configuration of one manager.
#[derive(Debug, Clone)]
pub struct FormOptions<K> {
    pub validators: ValidatorTable<K>,
    /// Add the input's own validation message to the field errors.
    pub native_input_validation: bool,
    /// Skip the pristine phase and validate from the first update.
    pub validate_from_start: bool,
    pub activation: ActivationPolicy,
}

impl<K: FieldKey> FormOptions<K> {
    pub fn new() -> Self {
        Self {
            validators: ValidatorTable::new(),
            native_input_validation: false,
            validate_from_start: false,
            activation: ActivationPolicy::default(),
        }
    }

    /// Take the option flags from a settings file; validators stay empty.
    pub fn from_settings(settings: &FormSettings) -> Self {
        Self {
            validators: ValidatorTable::new(),
            native_input_validation: settings.native_input_validation,
            validate_from_start: settings.validate_from_start,
            activation: settings.activation,
        }
    }

    pub fn validators(mut self, validators: ValidatorTable<K>) -> Self {
        self.validators = validators;
        self
    }

    pub fn native_input_validation(mut self, enabled: bool) -> Self {
        self.native_input_validation = enabled;
        self
    }

    pub fn validate_from_start(mut self, enabled: bool) -> Self {
        self.validate_from_start = enabled;
        self
    }

    pub fn activation(mut self, policy: ActivationPolicy) -> Self {
        self.activation = policy;
        self
    }
}

impl<K: FieldKey> Default for FormOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_helpers_skip_other_kinds() {
        let table = ValidatorTable::new()
            .text("name", |name| (name != "Bob").then(|| vec!["Not Bob".to_string()]))
            .number("age", |age| (age == 12.0).then(|| vec!["dislike 12".to_string()]));

        let name = table.get(&"name").unwrap();
        assert_eq!(name(&FieldValue::from("Alice")), Some(vec!["Not Bob".to_string()]));
        assert_eq!(name(&FieldValue::from("Bob")), None);
        assert_eq!(name(&FieldValue::from(3)), None);

        let age = table.get(&"age").unwrap();
        assert_eq!(age(&FieldValue::from(12)), Some(vec!["dislike 12".to_string()]));
        assert_eq!(age(&FieldValue::from("12")), None);
    }

    #[test]
    fn defaults() {
        let options = FormOptions::<String>::default();
        assert!(options.validators.is_empty());
        assert!(!options.native_input_validation);
        assert!(!options.validate_from_start);
        assert_eq!(options.activation, ActivationPolicy::FirstUpdate);
    }

    #[test]
    fn from_settings_copies_flags() {
        let settings = FormSettings {
            native_input_validation: true,
            validate_from_start: true,
            activation: ActivationPolicy::FirstRead,
            ..FormSettings::default()
        };
        let options = FormOptions::<String>::from_settings(&settings);
        assert!(options.native_input_validation);
        assert!(options.validate_from_start);
        assert_eq!(options.activation, ActivationPolicy::FirstRead);
    }
}

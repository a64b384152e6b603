//! The form state manager.
//!
//! Owns the current [`FormState`] snapshot, the canonical initial values,
//! the options and the pristine phase. Every write goes through
//! [`FormReducer`]; validation happens here, before dispatch.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;

use crate::error::UnknownFieldError;
use crate::event::InputEvent;
use crate::form::{initialize, ErrorSet, FormIntent, FormReducer, FormState};
use crate::key::FieldKey;
use crate::mvi::Reducer;
use crate::options::{ActivationPolicy, FormOptions};
use crate::value::{FieldKind, FieldValue};

/// Takes the current state, runs the reducer, stores the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Whether custom validators currently run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Custom validators are skipped; native messages still apply.
    Pristine,
    Active,
}

/// Read-only projection of the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView<K: Ord> {
    pub values: BTreeMap<K, FieldValue>,
    /// `None` for a field without errors, otherwise its messages in the
    /// order they were first reported.
    pub errors: BTreeMap<K, Option<Vec<String>>>,
    pub pristine: bool,
    pub has_errors: bool,
}

impl<K: FieldKey> FormView<K> {
    fn from_state(state: &FormState<K>, pristine: bool) -> Self {
        let mut values = BTreeMap::new();
        let mut errors = BTreeMap::new();
        for (key, entry) in state.iter() {
            values.insert(key.clone(), entry.value.clone());
            errors.insert(key.clone(), entry.errors.to_messages());
        }
        let has_errors = errors.values().any(Option::is_some);

        Self {
            values,
            errors,
            pristine,
            has_errors,
        }
    }
}

/// Field maps serialize keyed by field name.
struct ByName<'a, K, V>(&'a BTreeMap<K, V>);

impl<K: FieldKey, V: Serialize> Serialize for ByName<'_, K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, value)| (key.name(), value)))
    }
}

impl<K: FieldKey> Serialize for FormView<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut view = serializer.serialize_struct("FormView", 4)?;
        view.serialize_field("values", &ByName(&self.values))?;
        view.serialize_field("errors", &ByName(&self.errors))?;
        view.serialize_field("pristine", &self.pristine)?;
        view.serialize_field("hasErrors", &self.has_errors)?;
        view.end()
    }
}

/// State container for one form.
///
/// The key set is fixed by the initial values. Transitions need
/// `&mut self` and run to completion; a snapshot obtained from
/// [`state`](Self::state) never changes afterwards.
#[derive(Debug)]
pub struct FormManager<K: FieldKey> {
    /// Canonical reset target, stored verbatim.
    init: BTreeMap<K, FieldValue>,
    state: FormState<K>,
    options: FormOptions<K>,
    phase: Phase,
}

impl<K: FieldKey> FormManager<K> {
    pub fn new<I, V>(init: I, options: FormOptions<K>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        V: Into<FieldValue>,
    {
        let init: BTreeMap<K, FieldValue> = init
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        let phase = if options.validate_from_start {
            Phase::Active
        } else {
            Phase::Pristine
        };

        tracing::debug!(
            fields = init.len(),
            validators = options.validators.len(),
            ?phase,
            "Form created"
        );

        Self {
            state: initialize(&init),
            init,
            options,
            phase,
        }
    }

    /// Keyed update: returns a setter for `key`.
    ///
    /// Each call of the setter validates the value (once the pristine phase
    /// has ended and a validator exists for `key`) and stores it with the
    /// resulting errors.
    ///
    /// # Errors
    /// Fails immediately if `key` is not one of the initial fields.
    pub fn update(&mut self, key: K) -> Result<impl FnMut(FieldValue) + '_, UnknownFieldError> {
        self.ensure_known(&key)?;
        Ok(move |value: FieldValue| self.apply_keyed(key.clone(), value))
    }

    /// Shorthand for `update(key)?(value.into())`.
    pub fn set(&mut self, key: K, value: impl Into<FieldValue>) -> Result<(), UnknownFieldError> {
        let mut setter = self.update(key)?;
        setter(value.into());
        Ok(())
    }

    /// Event update: apply an input change notification.
    ///
    /// The raw string is coerced to the kind of the field's initial value.
    /// Errors are the native validation message (when enabled) plus the
    /// custom validator's output on the coerced value (when active).
    ///
    /// # Errors
    /// Fails if `event.name` is not one of the initial fields. No
    /// transition happens in that case.
    pub fn update_from_event(&mut self, event: &InputEvent) -> Result<(), UnknownFieldError> {
        let Some((key, kind)) = self.resolve(&event.name) else {
            tracing::warn!(field = %event.name, "Input event for unknown field");
            return Err(UnknownFieldError::new(event.name.as_str()));
        };

        let mut errors = ErrorSet::new();
        if self.options.native_input_validation {
            errors.insert(event.validation_message.as_str());
        }

        let value = FieldValue::coerce(&event.value, kind);
        self.validate_into(&key, &value, &mut errors);
        self.commit(key, value, errors);
        Ok(())
    }

    /// Restore the initial values, clear all errors and re-arm the
    /// pristine phase.
    pub fn reset(&mut self) {
        let intent = FormIntent::Reset {
            init: self.init.clone(),
        };
        dispatch_mvi!(self, state, FormReducer<K>, intent);
        self.phase = Phase::Pristine;
        tracing::info!(fields = self.init.len(), "Form reset");
    }

    /// Read the derived view, completing one read cycle.
    ///
    /// The returned view reports the phase as it was during the read. With
    /// [`ActivationPolicy::FirstRead`] the pristine phase ends afterwards.
    pub fn read(&mut self) -> FormView<K> {
        let view = self.snapshot();
        if self.phase == Phase::Pristine && self.options.activation == ActivationPolicy::FirstRead {
            self.activate();
        }
        view
    }

    /// Compute the derived view without completing a read cycle.
    pub fn snapshot(&self) -> FormView<K> {
        FormView::from_state(&self.state, self.is_pristine())
    }

    pub fn values(&self) -> BTreeMap<K, FieldValue> {
        self.state
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    pub fn errors(&self) -> BTreeMap<K, Option<Vec<String>>> {
        self.state
            .iter()
            .map(|(key, entry)| (key.clone(), entry.errors.to_messages()))
            .collect()
    }

    pub fn value(&self, key: &K) -> Option<&FieldValue> {
        self.state.get(key).map(|entry| &entry.value)
    }

    /// Errors of one field, `None` when it has none or is unknown.
    pub fn field_errors(&self, key: &K) -> Option<Vec<String>> {
        self.state.get(key).and_then(|entry| entry.errors.to_messages())
    }

    pub fn has_errors(&self) -> bool {
        self.state.iter().any(|(_, entry)| !entry.errors.is_empty())
    }

    pub fn is_pristine(&self) -> bool {
        self.phase == Phase::Pristine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn contains(&self, key: &K) -> bool {
        self.init.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.init.keys()
    }

    /// The current immutable snapshot.
    pub fn state(&self) -> FormState<K> {
        self.state.clone()
    }

    pub fn initial_values(&self) -> &BTreeMap<K, FieldValue> {
        &self.init
    }

    pub fn options(&self) -> &FormOptions<K> {
        &self.options
    }

    pub(crate) fn ensure_known(&self, key: &K) -> Result<(), UnknownFieldError> {
        if self.init.contains_key(key) {
            Ok(())
        } else {
            tracing::warn!(field = key.name(), "Keyed update for unknown field");
            Err(UnknownFieldError::new(key.name()))
        }
    }

    /// Validate and store a value for a key already known to exist.
    pub(crate) fn apply_keyed(&mut self, key: K, value: FieldValue) {
        let mut errors = ErrorSet::new();
        self.validate_into(&key, &value, &mut errors);
        self.commit(key, value, errors);
    }

    fn resolve(&self, name: &str) -> Option<(K, FieldKind)> {
        self.init
            .iter()
            .find(|(key, _)| key.name() == name)
            .map(|(key, initial)| (key.clone(), initial.kind()))
    }

    fn validate_into(&self, key: &K, value: &FieldValue, errors: &mut ErrorSet) {
        if self.phase == Phase::Pristine {
            return;
        }
        let Some(validator) = self.options.validators.get(key) else {
            return;
        };

        tracing::trace!(field = key.name(), "Running validator");
        if let Some(messages) = validator(value) {
            errors.extend(messages);
        }
    }

    fn commit(&mut self, key: K, value: FieldValue, errors: ErrorSet) {
        tracing::debug!(
            field = key.name(),
            errors = errors.len(),
            pristine = self.is_pristine(),
            "Field updated"
        );

        let intent = FormIntent::FieldUpdate { key, value, errors };
        dispatch_mvi!(self, state, FormReducer<K>, intent);

        if self.phase == Phase::Pristine && self.options.activation == ActivationPolicy::FirstUpdate {
            self.activate();
        }
    }

    fn activate(&mut self) {
        self.phase = Phase::Active;
        tracing::debug!("Validation active");
    }
}

//! Intents for the form reducer.

use std::collections::BTreeMap;

use crate::form::state::ErrorSet;
use crate::key::FieldKey;
use crate::mvi::Intent;
use crate::value::FieldValue;

/// Intents that can be dispatched to the form reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent<K> {
    /// Replace one field's value and error set.
    ///
    /// Errors are computed by the manager before dispatch.
    FieldUpdate {
        key: K,
        value: FieldValue,
        errors: ErrorSet,
    },

    /// Discard the whole state and rebuild it from `init`.
    Reset { init: BTreeMap<K, FieldValue> },
}

impl<K: FieldKey> Intent for FormIntent<K> {}

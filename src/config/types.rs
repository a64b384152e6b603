use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::options::ActivationPolicy;
use crate::value::FieldValue;

/// Option flags and initial values read from a settings file.
///
/// ```toml
/// native_input_validation = true
/// activation = "first_read"
///
/// [initial]
/// name = "The builder"
/// age = 0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Add input validation messages to the field errors.
    pub native_input_validation: bool,
    /// Run custom validators from the very first update.
    pub validate_from_start: bool,
    /// When the pristine phase ends.
    pub activation: ActivationPolicy,
    /// Initial values overriding the built-in ones, keyed by field name.
    pub initial: BTreeMap<String, FieldValue>,
}

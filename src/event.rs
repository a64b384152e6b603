//! Input change notifications.

use serde::{Deserialize, Serialize};

/// A change notification from a text-oriented input widget.
///
/// `value` is always a string, whatever the field's kind. The manager
/// coerces it before validation and storage. `validation_message` is the
/// widget's own constraint-violation text, empty when the input is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputEvent {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub validation_message: String,
}

impl InputEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            validation_message: String::new(),
        }
    }

    pub fn with_validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = message.into();
        self
    }
}

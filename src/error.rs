//! Error types shared across the crate.
//!
//! Validation findings are not errors: they travel as data through
//! [`FormView::errors`](crate::FormView). The types here cover caller
//! mistakes and configuration failures only.

use thiserror::Error;

use crate::config::ConfigError;

/// A field name outside the schema fixed at construction was used.
///
/// This signals a mismatch between the UI and the declared fields. The
/// manager never guesses a replacement key and never applies a transition
/// when it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field '{name}'")]
pub struct UnknownFieldError {
    pub name: String,
}

impl UnknownFieldError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Top-level error for callers that mix form updates and settings loading.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_message_names_field() {
        let err = UnknownFieldError::new("doesNotExist");
        assert_eq!(err.to_string(), "Unknown field 'doesNotExist'");
    }

    #[test]
    fn form_error_wraps_unknown_field() {
        let err: FormError = UnknownFieldError::new("x").into();
        assert!(matches!(err, FormError::UnknownField(ref e) if e.name == "x"));
        assert_eq!(err.to_string(), "Unknown field 'x'");
    }
}

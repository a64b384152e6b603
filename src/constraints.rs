//! Input constraints producing native validation messages.
//!
//! Stands in for the constraint checks an input widget performs on its
//! own (`required`, `maxlength`, `type=number`, `pattern`). The first
//! violated constraint yields the message carried by [`InputEvent`].

use regex::Regex;

use crate::config::ConfigError;
use crate::event::InputEvent;
use crate::value::parse_number;

#[derive(Debug, Clone, Default)]
pub struct InputConstraints {
    required: bool,
    max_length: Option<usize>,
    numeric: bool,
    pattern: Option<Regex>,
}

impl InputConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Maximum length in characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    /// Pattern the whole value must match. Empty values are not checked.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPattern`] if `pattern` does not compile.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.pattern = Some(regex);
        Ok(self)
    }

    /// Message for the first violated constraint, or `""` when `value`
    /// satisfies all of them.
    pub fn validation_message(&self, value: &str) -> String {
        if value.is_empty() {
            return if self.required {
                "Please fill out this field.".to_string()
            } else {
                String::new()
            };
        }

        if let Some(max) = self.max_length {
            let used = value.chars().count();
            if used > max {
                return format!(
                    "Please shorten this text to {} characters or less (you are currently using {} characters).",
                    max, used
                );
            }
        }

        if self.numeric && parse_number(value).is_nan() {
            return "Please enter a number.".to_string();
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return "Please match the requested format.".to_string();
            }
        }

        String::new()
    }

    /// Change notification for input `name` now holding `value`.
    pub fn event(&self, name: &str, value: &str) -> InputEvent {
        InputEvent::new(name, value).with_validation_message(self.validation_message(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_constraints_accept_anything() {
        assert_eq!(InputConstraints::new().validation_message("anything"), "");
        assert_eq!(InputConstraints::new().validation_message(""), "");
    }

    #[test]
    fn required_rejects_empty() {
        let constraints = InputConstraints::new().required();
        assert_eq!(constraints.validation_message(""), "Please fill out this field.");
        assert_eq!(constraints.validation_message("x"), "");
    }

    #[test]
    fn max_length_counts_chars() {
        let constraints = InputConstraints::new().max_length(6);
        assert_eq!(constraints.validation_message("Ünïcod"), "");
        assert_eq!(
            constraints.validation_message("Bartholomew"),
            "Please shorten this text to 6 characters or less (you are currently using 11 characters)."
        );
    }

    #[test]
    fn numeric_rejects_non_numbers() {
        let constraints = InputConstraints::new().numeric();
        assert_eq!(constraints.validation_message("12"), "");
        assert_eq!(constraints.validation_message("twelve"), "Please enter a number.");
    }

    #[test]
    fn pattern_matches_whole_value() {
        let constraints = InputConstraints::new().pattern("[A-Z0-9]").unwrap();
        assert_eq!(constraints.validation_message("Q"), "");
        assert_eq!(constraints.validation_message(""), "");
        assert_eq!(
            constraints.validation_message("QQ"),
            "Please match the requested format."
        );
        assert_eq!(
            constraints.validation_message("q"),
            "Please match the requested format."
        );
    }

    #[test]
    fn invalid_pattern_is_config_error() {
        let err = InputConstraints::new().pattern("[unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
    }

    #[test]
    fn event_carries_message() {
        let event = InputConstraints::new().max_length(2).event("code", "abc");
        assert_eq!(event.name, "code");
        assert_eq!(event.value, "abc");
        assert!(!event.validation_message.is_empty());
    }
}

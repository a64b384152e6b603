//! Field values and string coercion.
//!
//! Inputs that originate from text widgets always deliver strings. Before a
//! custom validator sees such a value it is converted to the kind of the
//! field's initial value, so a numeric field stays numeric no matter how the
//! value arrived.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a field, derived from its initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    /// Anything that is not one of the three primitives.
    Opaque,
}

/// A single field value.
///
/// `Opaque` is the escape hatch for loosely typed payloads (JSON documents,
/// `null` placeholders). Coercion never produces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    Opaque(serde_json::Value),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Opaque(_) => FieldKind::Opaque,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&serde_json::Value> {
        match self {
            FieldValue::Opaque(value) => Some(value),
            _ => None,
        }
    }

    /// `true` for an opaque JSON `null`, the conventional "not loaded yet"
    /// placeholder.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Opaque(serde_json::Value::Null))
    }

    /// Convert a raw input string to a value of `kind`.
    ///
    /// - `Text`: unchanged
    /// - `Number`: see [`parse_number`]
    /// - `Boolean`: `true` iff the string is non-empty
    /// - `Opaque`: passed through unmodified as text
    pub fn coerce(raw: &str, kind: FieldKind) -> FieldValue {
        match kind {
            FieldKind::Text | FieldKind::Opaque => FieldValue::Text(raw.to_string()),
            FieldKind::Number => FieldValue::Number(parse_number(raw)),
            FieldKind::Boolean => FieldValue::Boolean(!raw.is_empty()),
        }
    }
}

/// Numeric conversion with the semantics UI scripting layers apply to input
/// strings.
///
/// Surrounding whitespace is ignored and an empty string is `0`. `Infinity`
/// (optionally signed) and the `0x`/`0o`/`0b` radix prefixes are accepted.
/// Anything else that is not a plain decimal literal is `NaN`.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let lower = trimmed.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // Rust accepts "inf" and "nan" spellings that are not numeric input.
    let decimal_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_chars {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits only, no sign. Accumulates in `f64` so wide literals stay finite.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => write!(f, "{}", number),
            FieldValue::Boolean(flag) => write!(f, "{}", flag),
            FieldValue::Opaque(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::Opaque(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(FieldValue::from("a").kind(), FieldKind::Text);
        assert_eq!(FieldValue::from(3).kind(), FieldKind::Number);
        assert_eq!(FieldValue::from(true).kind(), FieldKind::Boolean);
        assert_eq!(
            FieldValue::from(serde_json::Value::Null).kind(),
            FieldKind::Opaque
        );
    }

    #[test]
    fn coerce_to_number() {
        assert_eq!(FieldValue::coerce("12", FieldKind::Number), FieldValue::Number(12.0));
        assert_eq!(FieldValue::coerce(" 1.5 ", FieldKind::Number), FieldValue::Number(1.5));
        assert_eq!(FieldValue::coerce("", FieldKind::Number), FieldValue::Number(0.0));
    }

    #[test]
    fn coerce_to_boolean_uses_emptiness() {
        assert_eq!(FieldValue::coerce("", FieldKind::Boolean), FieldValue::Boolean(false));
        assert_eq!(FieldValue::coerce("false", FieldKind::Boolean), FieldValue::Boolean(true));
        assert_eq!(FieldValue::coerce("on", FieldKind::Boolean), FieldValue::Boolean(true));
    }

    #[test]
    fn coerce_opaque_passes_text_through() {
        assert_eq!(
            FieldValue::coerce("5000", FieldKind::Opaque),
            FieldValue::Text("5000".to_string())
        );
    }

    #[test]
    fn parse_number_special_forms() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_number("1e3"), 1000.0);

        let wide = parse_number("0xFFFFFFFFFFFFFFFFFF");
        assert!(wide.is_finite());
        assert!((wide / 4.722_366_482_869_645e21 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("nan").is_nan());
        assert!(parse_number("12px").is_nan());
        assert!(parse_number("0xZZ").is_nan());
        assert!(parse_number("0x+1F").is_nan());
        assert!(parse_number("0b+1").is_nan());
        assert!(parse_number("0x").is_nan());
    }

    #[test]
    fn untagged_deserialize_picks_primitive() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"["x", 4, true, null, {"a": 1}]"#).unwrap();
        assert_eq!(values[0], FieldValue::Text("x".to_string()));
        assert_eq!(values[1], FieldValue::Number(4.0));
        assert_eq!(values[2], FieldValue::Boolean(true));
        assert!(values[3].is_null());
        assert_eq!(values[4].kind(), FieldKind::Opaque);
    }
}

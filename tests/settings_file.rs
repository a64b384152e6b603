use formstate::demo::person::{PersonField, PersonForm};
use formstate::{ActivationPolicy, ConfigError, FieldValue, FormSettings};
use std::fs;
use tempfile::TempDir;

fn write_settings(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write settings");
    (dir, path)
}

#[test]
fn load_from_reads_flags_and_initial_values() {
    let (_dir, path) = write_settings(
        r#"
validate_from_start = true
activation = "first_read"

[initial]
name = "Ada"
age = 36
"#,
    );

    let settings = FormSettings::load_from(&path).unwrap();
    assert!(settings.validate_from_start);
    assert!(!settings.native_input_validation);
    assert_eq!(settings.activation, ActivationPolicy::FirstRead);

    let person = PersonForm::new(&settings).unwrap();
    assert_eq!(person.form().value(&PersonField::Age), Some(&FieldValue::from(36)));
    assert!(!person.form().is_pristine());
}

#[test]
fn missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = FormSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_is_parse_error() {
    let (_dir, path) = write_settings("validate_from_start = \"sometimes\"\n");

    let err = FormSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

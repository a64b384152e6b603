//! Person form demo: a line-driven form over four fields.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

use crate::config::{ConfigError, FormSettings};
use crate::constraints::InputConstraints;
use crate::error::{FormError, UnknownFieldError};
use crate::key::FieldKey;
use crate::manager::{FormManager, FormView};
use crate::options::{FormOptions, ValidatorTable};
use crate::value::FieldValue;

pub const CORRECT_NAME: &str = "Bob";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PersonField {
    Name,
    Age,
    FavoriteCharacter,
    IsRealPerson,
}

impl FieldKey for PersonField {
    fn name(&self) -> &str {
        match self {
            PersonField::Name => "name",
            PersonField::Age => "age",
            PersonField::FavoriteCharacter => "favoriteCharacter",
            PersonField::IsRealPerson => "isRealPerson",
        }
    }
}

impl PersonField {
    pub const ALL: [PersonField; 4] = [
        PersonField::Name,
        PersonField::Age,
        PersonField::FavoriteCharacter,
        PersonField::IsRealPerson,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    fn default_value(self) -> FieldValue {
        match self {
            PersonField::Name => FieldValue::from("The builder"),
            PersonField::Age => FieldValue::from(0),
            PersonField::FavoriteCharacter => FieldValue::from(serde_json::Value::Null),
            PersonField::IsRealPerson => FieldValue::from(true),
        }
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type `value` into the input named `field`.
    Set { field: String, value: String },
    /// Press "Set correct name".
    Bob,
    /// Click the "real person" checkbox.
    Toggle,
    Reset,
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("usage: set <field> <value>")]
    MissingField,
    #[error("unknown command '{0}'")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        match word {
            "" => Err(ParseCommandError::Empty),
            "set" => {
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(ParseCommandError::MissingField);
                }
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "bob" => Ok(Command::Bob),
            "toggle" => Ok(Command::Toggle),
            "reset" => Ok(Command::Reset),
            "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

/// The person form with its input constraints.
pub struct PersonForm {
    form: FormManager<PersonField>,
    inputs: BTreeMap<String, InputConstraints>,
}

impl PersonForm {
    /// Build the form. Initial values from `settings` override the
    /// built-in ones.
    ///
    /// # Errors
    /// Fails if `settings` names a field the form does not have.
    pub fn new(settings: &FormSettings) -> Result<Self, FormError> {
        let mut init: BTreeMap<PersonField, FieldValue> = PersonField::ALL
            .into_iter()
            .map(|field| (field, field.default_value()))
            .collect();
        for (name, value) in &settings.initial {
            let field =
                PersonField::from_name(name).ok_or_else(|| UnknownFieldError::new(name.as_str()))?;
            init.insert(field, value.clone());
        }

        let validators = ValidatorTable::new()
            .text(PersonField::Name, |name| {
                (name != CORRECT_NAME).then(|| vec!["Not Bob".to_string()])
            })
            .number(PersonField::Age, |age| {
                (age == 12.0).then(|| vec!["I dislike the number 12, pick another".to_string()])
            });
        let options = FormOptions::from_settings(settings).validators(validators);

        Ok(Self {
            form: FormManager::new(init, options),
            inputs: Self::inputs()?,
        })
    }

    fn inputs() -> Result<BTreeMap<String, InputConstraints>, ConfigError> {
        let mut inputs = BTreeMap::new();
        inputs.insert("name".to_string(), InputConstraints::new().max_length(6));
        inputs.insert("age".to_string(), InputConstraints::new().numeric());
        inputs.insert(
            "favoriteCharacter".to_string(),
            InputConstraints::new().pattern("[A-Z0-9]")?,
        );
        Ok(inputs)
    }

    /// Apply one command. Returns `false` once the user asked to quit.
    ///
    /// # Errors
    /// `set` on a field the form does not have.
    pub fn apply(&mut self, command: Command) -> Result<bool, UnknownFieldError> {
        match command {
            Command::Set { field, value } => {
                let event = match self.inputs.get(&field) {
                    Some(input) => input.event(&field, &value),
                    None => InputConstraints::new().event(&field, &value),
                };
                self.form.update_from_event(&event)?;
            }
            Command::Bob => {
                self.form.update(PersonField::Name)?(FieldValue::from(CORRECT_NAME));
            }
            Command::Toggle => {
                let checked = self
                    .form
                    .value(&PersonField::IsRealPerson)
                    .and_then(FieldValue::as_bool)
                    .unwrap_or(false);
                self.form.update(PersonField::IsRealPerson)?(FieldValue::from(!checked));
            }
            Command::Reset => self.form.reset(),
            Command::Show => {}
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Render: one read cycle of the form.
    pub fn render(&mut self) -> FormView<PersonField> {
        self.form.read()
    }

    pub fn form(&self) -> &FormManager<PersonField> {
        &self.form
    }
}

/// Run the demo: one command per input line, the view as JSON after each.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, settings: &FormSettings) -> anyhow::Result<()> {
    let mut person = PersonForm::new(settings)?;
    writeln!(output, "{}", serde_json::to_string(&person.render())?)?;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => continue,
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                continue;
            }
        };

        match person.apply(command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                continue;
            }
        }
        writeln!(output, "{}", serde_json::to_string(&person.render())?)?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(field: &str, value: &str) -> Command {
        Command::Set {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn parse_commands() {
        assert_eq!("set name Bob".parse::<Command>(), Ok(set("name", "Bob")));
        assert_eq!("set name  two words".parse::<Command>(), Ok(set("name", " two words")));
        assert_eq!("set age".parse::<Command>(), Ok(set("age", "")));
        assert_eq!("  reset ".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!("set".parse::<Command>(), Err(ParseCommandError::MissingField));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseCommandError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn field_names_round_trip() {
        for field in PersonField::ALL {
            assert_eq!(PersonField::from_name(field.name()), Some(field));
        }
        assert_eq!(PersonField::from_name("nope"), None);
    }

    #[test]
    fn settings_override_initial_values() {
        let mut settings = FormSettings::default();
        settings.initial.insert("name".to_string(), FieldValue::from("Ada"));

        let person = PersonForm::new(&settings).unwrap();
        assert_eq!(
            person.form().value(&PersonField::Name),
            Some(&FieldValue::from("Ada"))
        );
    }

    #[test]
    fn settings_with_unknown_field_fail() {
        let mut settings = FormSettings::default();
        settings.initial.insert("shoeSize".to_string(), FieldValue::from(44));

        let err = PersonForm::new(&settings).err().unwrap();
        assert!(matches!(err, FormError::UnknownField(ref e) if e.name == "shoeSize"));
    }

    #[test]
    fn native_messages_follow_settings() {
        let settings = FormSettings {
            native_input_validation: true,
            ..FormSettings::default()
        };
        let mut person = PersonForm::new(&settings).unwrap();

        person.apply(set("favoriteCharacter", "ab")).unwrap();
        assert_eq!(
            person.form().field_errors(&PersonField::FavoriteCharacter),
            Some(vec!["Please match the requested format.".to_string()])
        );
        assert_eq!(
            person.form().value(&PersonField::FavoriteCharacter),
            Some(&FieldValue::from("ab"))
        );
    }

    #[test]
    fn toggle_flips_checkbox() {
        let mut person = PersonForm::new(&FormSettings::default()).unwrap();
        person.apply(Command::Toggle).unwrap();
        assert_eq!(
            person.form().value(&PersonField::IsRealPerson),
            Some(&FieldValue::from(false))
        );
        person.apply(Command::Toggle).unwrap();
        assert_eq!(
            person.form().value(&PersonField::IsRealPerson),
            Some(&FieldValue::from(true))
        );
    }

    #[test]
    fn set_unknown_field_is_error() {
        let mut person = PersonForm::new(&FormSettings::default()).unwrap();
        let err = person.apply(set("shoeSize", "44")).unwrap_err();
        assert_eq!(err.name, "shoeSize");
    }

    #[test]
    fn run_prints_view_per_command() {
        let input = b"set name Alice\nset name Alice\nbob\nbogus\nquit\nshow\n";
        let mut output = Vec::new();
        run(&input[..], &mut output, &FormSettings::default()).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // initial render + 3 commands + 1 parse error; nothing after quit
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains(r#""pristine":true"#));
        assert!(lines[1].contains(r#""name":null"#));
        assert!(lines[2].contains(r#""name":["Not Bob"]"#));
        assert!(lines[3].contains(r#""hasErrors":false"#));
        assert_eq!(lines[4], "Error: unknown command 'bogus'");
    }
}

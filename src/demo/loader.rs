//! Data loader demo: two opaque fields populated after a delay.
//!
//! Each field is written by its own task through a handle setter. The
//! tasks belong to the [`DataLoader`]; dropping it aborts whatever has not
//! fired yet, the way a view cancels its timers when torn down.

use std::io::Write;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::error::UnknownFieldError;
use crate::handle::FormHandle;
use crate::manager::FormManager;
use crate::options::FormOptions;
use crate::value::FieldValue;

pub const JSON: &str = "json";
pub const ANOTHER_JSON: &str = "anotherJson";

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
pub struct LoaderDelays {
    pub json: Duration,
    pub another_json: Duration,
}

impl Default for LoaderDelays {
    fn default() -> Self {
        Self {
            json: Duration::from_secs(1),
            another_json: Duration::from_secs(3),
        }
    }
}

/// The form both fields live in, each starting as `null`.
pub fn loader_form() -> FormHandle<&'static str> {
    FormHandle::new(FormManager::new(
        [
            (JSON, serde_json::Value::Null),
            (ANOTHER_JSON, serde_json::Value::Null),
        ],
        FormOptions::new(),
    ))
}

pub fn glossary() -> serde_json::Value {
    serde_json::json!({
        "glossary": {
            "title": "example glossary",
            "GlossDiv": {
                "title": "S",
                "GlossList": {
                    "GlossEntry": {
                        "ID": "SGML",
                        "SortAs": "SGML",
                        "GlossTerm": "Standard Generalized Markup Language",
                        "Acronym": "SGML",
                        "Abbrev": "ISO 8879:1986",
                        "GlossDef": {
                            "para": "A meta-markup language, used to create markup languages such as DocBook.",
                            "GlossSeeAlso": ["GML", "XML"]
                        },
                        "GlossSee": "markup"
                    }
                }
            }
        }
    })
}

/// Owns the pending population tasks.
pub struct DataLoader {
    tasks: Vec<JoinHandle<()>>,
}

impl DataLoader {
    /// Schedule both populations. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Fails if `form` lacks one of the two fields.
    pub fn start(
        form: &FormHandle<&'static str>,
        delays: LoaderDelays,
    ) -> Result<Self, UnknownFieldError> {
        let set_json = form.setter(JSON)?;
        let set_another = form.setter(ANOTHER_JSON)?;

        let json = tokio::spawn(async move {
            tokio::time::sleep(delays.json).await;
            tracing::debug!(field = JSON, "Populating");
            set_json(FieldValue::from(glossary()));
        });
        let another = tokio::spawn(async move {
            tokio::time::sleep(delays.another_json).await;
            tracing::debug!(field = ANOTHER_JSON, "Populating");
            set_another(FieldValue::from("5000"));
        });

        Ok(Self {
            tasks: vec![json, another],
        })
    }

    pub fn is_finished(&self) -> bool {
        self.tasks.iter().all(JoinHandle::is_finished)
    }
}

impl Drop for DataLoader {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// One line per field: its JSON, or a loading notice while still `null`.
pub fn render(form: &FormHandle<&'static str>) -> Vec<String> {
    let view = form.read();
    [JSON, ANOTHER_JSON]
        .into_iter()
        .map(|field| match view.values.get(&field) {
            Some(value) if !value.is_null() => {
                serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
            }
            _ => format!("Loading {}", field),
        })
        .collect()
}

/// Run the demo, printing the rendered lines whenever they change.
pub async fn run<W: Write>(mut output: W, delays: LoaderDelays) -> anyhow::Result<()> {
    let form = loader_form();
    let loader = DataLoader::start(&form, delays)?;

    let mut last = Vec::new();
    loop {
        let lines = render(&form);
        if lines != last {
            for line in &lines {
                writeln!(output, "{}", line)?;
            }
            output.flush()?;
            last = lines;
        }
        if loader.is_finished() {
            break;
        }
        tokio::time::sleep(TICK).await;
    }

    // Catch a write that landed after the last render.
    let lines = render(&form);
    if lines != last {
        for line in &lines {
            writeln!(output, "{}", line)?;
        }
    }
    Ok(())
}

//! State container for form-like UIs.
//!
//! A [`FormManager`] tracks a fixed set of fields, each with a current
//! value and a set of validation errors. Writes arrive either through a
//! keyed setter or as an [`InputEvent`] from an input widget; custom
//! validators run once the pristine phase is over; [`FormManager::reset`]
//! restores the initial values in one step. Reads produce a [`FormView`].
//!
//! ```
//! use formstate::{FieldValue, FormManager, FormOptions, ValidatorTable};
//!
//! let mut form = FormManager::new(
//!     [("name", FieldValue::from("The builder")), ("age", FieldValue::from(0))],
//!     FormOptions::new().validators(
//!         ValidatorTable::new()
//!             .text("name", |name| (name != "Bob").then(|| vec!["Not Bob".to_string()])),
//!     ),
//! );
//!
//! form.update("name")?(FieldValue::from("Alice")); // grace update
//! form.update("name")?(FieldValue::from("Alice"));
//! assert_eq!(form.read().errors[&"name"], Some(vec!["Not Bob".to_string()]));
//!
//! form.reset();
//! assert!(!form.read().has_errors);
//! # Ok::<(), formstate::UnknownFieldError>(())
//! ```

pub mod config;
pub mod constraints;
pub mod demo;
pub mod error;
pub mod event;
pub mod form;
pub mod handle;
pub mod key;
pub mod manager;
pub mod mvi;
pub mod options;
pub mod value;

pub use config::{ConfigError, FormSettings};
pub use constraints::InputConstraints;
pub use error::{FormError, UnknownFieldError};
pub use event::InputEvent;
pub use form::{initialize, ErrorSet, FieldEntry, FormIntent, FormReducer, FormState};
pub use handle::FormHandle;
pub use key::FieldKey;
pub use manager::{FormManager, FormView, Phase};
pub use options::{ActivationPolicy, FormOptions, Validator, ValidatorTable};
pub use value::{FieldKind, FieldValue};

//! Field keys.

use std::fmt;

/// Identifies one field of a form.
///
/// `String` and `&'static str` keys give a dynamic schema. A closed enum
/// implementing this trait gives a typed one, where every key the UI can
/// name is checked by the compiler.
///
/// ```
/// use formstate::FieldKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// enum Login {
///     User,
///     Remember,
/// }
///
/// impl FieldKey for Login {
///     fn name(&self) -> &str {
///         match self {
///             Login::User => "user",
///             Login::Remember => "remember",
///         }
///     }
/// }
///
/// assert_eq!(Login::Remember.name(), "remember");
/// ```
pub trait FieldKey: Clone + Ord + fmt::Debug + Send + Sync + 'static {
    /// Name used by input events (the `name` attribute of an input).
    fn name(&self) -> &str;
}

impl FieldKey for String {
    fn name(&self) -> &str {
        self
    }
}

impl FieldKey for &'static str {
    fn name(&self) -> &str {
        self
    }
}

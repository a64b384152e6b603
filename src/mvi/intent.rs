//! Base trait for intents in the MVI flow.

/// Marker trait for intent objects.
///
/// An intent carries everything the reducer needs to compute the next
/// state. Validation and other side effects happen before an intent is
/// built, never inside the reducer.
pub trait Intent: Send + 'static {}

//! Base trait for state snapshots in the MVI flow.

/// Marker trait for state objects.
///
/// States are snapshots: once produced they are never edited, a new
/// value replaces them. `Default` is the empty snapshot used while a
/// transition takes ownership of the current one.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

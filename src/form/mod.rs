//! Form state feature module.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - field entries, error sets and the immutable form snapshot
//! - `intent.rs` - field writes and resets
//! - `reducer.rs` - state transitions (pure, no validation)

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{initialize, ErrorSet, FieldEntry, FormState};

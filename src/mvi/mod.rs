//! Model-View-Intent (MVI) primitives.
//!
//! Every state container in this crate follows the same unidirectional
//! flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced on every transition
//! - **Intent**: a requested change (field write, reset)
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

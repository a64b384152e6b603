//! Settings file support.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::FormSettings;

//! Terminal demos built on the form manager.
//!
//! - `person` - interactive person form driven by input events
//! - `loader` - delayed population of two opaque fields
//! - `logging` - tracing setup for the binary

pub mod loader;
pub mod logging;
pub mod person;

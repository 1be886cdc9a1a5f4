//! Starting, wiring and stopping the actors, plus logging setup.

pub mod system;
pub mod tracing;

pub use system::*;

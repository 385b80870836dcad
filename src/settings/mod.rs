//! In-memory typed settings registry
//!
//! Holds the runtime-configurable parameters (display duration, font,
//! lead-in/out timing) as named, typed options. Built fresh on every
//! invocation; nothing is persisted.

pub mod defaults;
pub mod registry;
pub mod types;

pub use registry::Settings;
pub use types::{OptionKind, OptionValue};

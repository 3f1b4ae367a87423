//! Keyboard input: maps physical key strings to viewer commands.

/// Serializable key-string → command map.
pub mod bindings;

pub use bindings::{KeyBindings, KeyCommandTag};

//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]. The engine only
//! ever sees intents, so any other input source can drive it the same way.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit, should_restart};

//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game is
//! turn based, so there is no auto-repeat handling here: one key press is one
//! move.

pub mod map;

pub use tui_128_types as types;

pub use map::{handle_key_event, should_quit};

//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game is
//! turn based, so every key press maps to at most one action and there is no
//! repeat handling.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};

//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`InputAction`]s and tracks the board
//! cursor that turns "flip" into a concrete [`crate::types::GameAction`].

pub mod cursor;
pub mod map;

pub use flip_cards_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit, Direction, InputAction};

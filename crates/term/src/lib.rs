//! Terminal "game renderer" module.
//!
//! Renders a session snapshot into a simple framebuffer of styled cells and
//! flushes it to the terminal with `crossterm`. No widget toolkit involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure (`BoardView` never touches the terminal)
//! - Only send changed cells to the terminal

pub mod board_view;
pub mod fb;
pub mod render_throttle;
pub mod renderer;

pub use flip_cards_core as core;
pub use flip_cards_types as types;

pub use board_view::{BoardView, Viewport, CARD_H, CARD_W};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

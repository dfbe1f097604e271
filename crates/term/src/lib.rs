//! Terminal renderer for the 2048 board.
//!
//! Frames are drawn into a plain framebuffer and then flushed to the terminal,
//! so the layout code never touches I/O and can be tested directly.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

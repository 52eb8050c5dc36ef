//! Terminal rendering for the 128 puzzle.
//!
//! A small, game-oriented rendering layer: the view draws a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a plain framebuffer, and
//! the renderer flushes framebuffers to the terminal with crossterm.
//!
//! - [`fb`]: framebuffer and styles
//! - [`palette`]: tile colours by value
//! - [`game_view`]: layout and drawing (pure, no I/O)
//! - [`renderer`]: terminal setup, teardown, and frame flushing

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_128_core as core;
pub use tui_128_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, Viewport};
pub use palette::tile_style;
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};

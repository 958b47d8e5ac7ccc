//! Terminal presentation layer.
//!
//! A small, game-oriented rendering pipeline: the core pushes changes into a
//! [`ViewModel`], [`GameView`] lays it out into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes only the changed cells to the terminal.
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Repaint only when the game reports a change
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod view_model;

pub use tetris_trainer_core as core;
pub use tetris_trainer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view_model::ViewModel;

//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into core [`InputEvent`](crate::types::InputEvent)
//! edges. Host auto-repeat is filtered out here so that every repeat the player
//! sees comes from the DAS engine. For terminals without key-release events a
//! [`ReleaseWatchdog`] synthesizes the missing releases.

pub mod map;
pub mod release;

pub use tetris_trainer_types as types;

pub use map::{map_key, should_quit, translate};
pub use release::ReleaseWatchdog;

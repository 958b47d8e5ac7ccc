//! Tetris Trainer (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tetris_trainer::{core, input, term, types}` and adds the host-side glue the
//! binary needs: configuration loading and log setup.

pub mod logging;
pub mod settings;

pub use tetris_trainer_core as core;
pub use tetris_trainer_input as input;
pub use tetris_trainer_term as term;
pub use tetris_trainer_types as types;

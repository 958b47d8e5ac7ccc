//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the timing and input-repeat engine of the game. It has
//! **no dependencies** on terminals or any other I/O, which makes it:
//!
//! - **Deterministic**: time is counted in frames, pieces come from a seeded source
//! - **Testable**: every rule can be driven frame by frame from a test
//! - **Portable**: any host that can call `frame()` ~60 times a second can run it
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid with full-row detection and row collapse
//! - [`pieces`]: static tetromino shape catalogue
//! - [`piece`]: the active piece controller (move, rotate, should-lock, lock)
//! - [`rng`]: piece sources (seeded random, scripted)
//! - [`das`]: Delayed Auto Shift key-repeat engine
//! - [`gravity`]: level-paced forced drops
//! - [`scoring`]: fixed reward table and gravity levels
//! - [`config`]: JSON configuration with validation
//! - [`session`]: the per-frame state machine
//! - [`game_loop`]: session plus renderer
//!
//! # Example
//!
//! ```
//! use tetris_trainer_core::{GameConfig, GameSession, SequencePieces};
//! use tetris_trainer_types::{GameStatus, Key, PieceKind};
//!
//! let config = GameConfig::default().with_level(0);
//! let mut game = GameSession::new(&config, SequencePieces::repeat(PieceKind::T));
//! assert_eq!(game.status(), GameStatus::StartScreen);
//!
//! game.key_down(Key::Start);
//! game.key_down(Key::Left);
//! for _ in 0..48 {
//!     game.tick();
//! }
//!
//! // One gravity drop at level 0.
//! assert_eq!(game.piece().unwrap().row, 1);
//! ```

pub mod board;
pub mod config;
pub mod das;
pub mod game_loop;
pub mod gravity;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;

pub use tetris_trainer_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig, DEFAULT_LEVEL};
pub use das::{DasConfig, DasEngine, HeldKeys};
pub use game_loop::{GameLoop, Renderer};
pub use gravity::GravityClock;
pub use piece::{ActivePiece, SpawnBlocked};
pub use pieces::get_shape;
pub use rng::{PieceSource, RandomPieces, SequencePieces, SimpleRng};
pub use scoring::{line_clear_reward, Level};
pub use session::{FrameOutcome, GameSession};

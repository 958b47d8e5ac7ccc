//! Game session - the per-frame state machine
//!
//! `GameSession` owns every piece of mutable game state: the board, the
//! falling piece, held keys, the DAS engine, the gravity clock, score, and the
//! current [`GameStatus`]. All of it is mutated from three entry points only:
//! [`GameSession::key_down`], [`GameSession::key_up`], and [`GameSession::tick`].
//!
//! # Frame order
//!
//! Each tick runs strictly in this order:
//!
//! 1. DAS tick (always, even while paused; moves it fires are applied only while running)
//! 2. Gravity tick (running only)
//! 3. Lock, row clear, score, respawn (whenever a downward move finds the piece resting)
//!
//! # Status transitions
//!
//! | From | Signal | To |
//! |------|--------|----|
//! | StartScreen | `Key::Start` | Running |
//! | Running | `Key::Pause` | Paused |
//! | Paused | `Key::Pause` | Running |
//! | Running | spawn blocked | GameOver |
//!
//! GameOver is terminal.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::das::{DasEngine, HeldKeys};
use crate::gravity::GravityClock;
use crate::piece::ActivePiece;
use crate::rng::PieceSource;
use crate::scoring::{line_clear_reward, Level};
use crate::types::{Direction, GameStatus, InputEvent, Key};

/// What changed during one input event or frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Locked cells changed (a lock or a row collapse).
    pub board_changed: bool,
    /// The falling piece moved, rotated, spawned or vanished.
    pub piece_changed: bool,
    pub score_changed: bool,
    /// Header text may differ (status change or running frame counter).
    pub status_changed: bool,
    /// Rows collapsed by locks during this step.
    pub rows_cleared: usize,
}

impl FrameOutcome {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn merge(&mut self, other: FrameOutcome) {
        self.board_changed |= other.board_changed;
        self.piece_changed |= other.piece_changed;
        self.score_changed |= other.score_changed;
        self.status_changed |= other.status_changed;
        self.rows_cleared += other.rows_cleared;
    }
}

#[derive(Debug, Clone)]
pub struct GameSession<S> {
    board: Board,
    piece: Option<ActivePiece>,
    source: S,
    status: GameStatus,
    held: HeldKeys,
    das: DasEngine,
    gravity: GravityClock,
    score: u32,
    lines: u32,
    pieces_locked: u32,
}

impl<S: PieceSource> GameSession<S> {
    /// A session on the start screen with an all-vacant board.
    pub fn new(config: &GameConfig, source: S) -> Self {
        Self {
            board: Board::new(),
            piece: None,
            source,
            status: GameStatus::StartScreen,
            held: HeldKeys::default(),
            das: DasEngine::with_config(config.das),
            gravity: GravityClock::new(config.level()),
            score: 0,
            lines: 0,
            pieces_locked: 0,
        }
    }

    /// Replace the board before the game starts (fixtures, puzzles).
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Option<&ActivePiece> {
        self.piece.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn level(&self) -> Level {
        self.gravity.level()
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    pub fn das_count(&self) -> u32 {
        self.das.count()
    }

    pub fn gravity_frame_count(&self) -> u32 {
        self.gravity.frame_count()
    }

    pub fn header_text(&self) -> String {
        self.status.header_text(self.gravity.frame_count())
    }

    /// Leave the start screen and spawn the first piece.
    pub fn start(&mut self) -> FrameOutcome {
        let mut out = FrameOutcome::default();
        if self.status != GameStatus::StartScreen {
            return out;
        }
        self.set_status(GameStatus::Running, &mut out);
        self.spawn_next(&mut out);
        out
    }

    /// Flip between Running and Paused. Ignored in any other status.
    pub fn toggle_pause(&mut self) -> FrameOutcome {
        let mut out = FrameOutcome::default();
        match self.status {
            GameStatus::Running => self.set_status(GameStatus::Paused, &mut out),
            GameStatus::Paused => self.set_status(GameStatus::Running, &mut out),
            GameStatus::StartScreen | GameStatus::GameOver => {}
        }
        out
    }

    pub fn handle(&mut self, event: InputEvent) -> FrameOutcome {
        match event {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
        }
    }

    /// Down edge of a key. Movement keys act once immediately and start DAS.
    ///
    /// A down edge for a direction already held is ignored, so host
    /// auto-repeat that slips through cannot double-move.
    pub fn key_down(&mut self, key: Key) -> FrameOutcome {
        match key {
            Key::Pause => return self.toggle_pause(),
            Key::Start => return self.start(),
            Key::Left | Key::Right | Key::Down | Key::Rotate => {}
        }

        let mut out = FrameOutcome::default();
        if !self.status.is_running() {
            return out;
        }

        match key.direction() {
            Some(direction) => {
                if self.held.is_held(direction) {
                    return out;
                }
                self.held.set(direction, true);
                self.apply_direction(direction, &mut out);
            }
            None => {
                let board = &self.board;
                if let Some(piece) = self.piece.as_mut() {
                    out.piece_changed |= piece.rotate(board);
                }
            }
        }
        out
    }

    /// Up edge of a key. Releasing any direction drops all DAS charge.
    pub fn key_up(&mut self, key: Key) -> FrameOutcome {
        if let Some(direction) = key.direction() {
            self.held.set(direction, false);
            self.das.reset();
        }
        FrameOutcome::default()
    }

    /// Advance one display frame.
    pub fn tick(&mut self) -> FrameOutcome {
        let mut out = FrameOutcome::default();

        // The counter keeps charging outside Running; only the move is gated.
        if let Some(direction) = self.das.tick(self.held) {
            if self.status.is_running() {
                self.apply_direction(direction, &mut out);
            }
        }

        if self.status.is_running() {
            out.status_changed = true;
            if self.gravity.tick() {
                self.move_down(&mut out);
            }
        }

        out
    }

    fn apply_direction(&mut self, direction: Direction, out: &mut FrameOutcome) {
        match direction {
            Direction::Left | Direction::Right => {
                let board = &self.board;
                if let Some(piece) = self.piece.as_mut() {
                    out.piece_changed |= if direction == Direction::Left {
                        piece.move_left(board)
                    } else {
                        piece.move_right(board)
                    };
                }
            }
            Direction::Down => self.move_down(out),
        }
    }

    /// The downward action shared by gravity, DAS and the soft-drop key.
    fn move_down(&mut self, out: &mut FrameOutcome) {
        let Some(piece) = self.piece.as_mut() else {
            return;
        };
        if piece.should_lock(&self.board) {
            self.lock_piece(out);
        } else {
            out.piece_changed |= piece.move_down(&self.board);
        }
    }

    fn lock_piece(&mut self, out: &mut FrameOutcome) {
        let Some(piece) = self.piece.take() else {
            return;
        };
        piece.lock(&mut self.board);
        self.pieces_locked += 1;
        out.board_changed = true;
        out.piece_changed = true;

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            let reward = line_clear_reward(cleared.len());
            self.score = self.score.saturating_add(reward);
            self.lines += cleared.len() as u32;
            out.score_changed = true;
            out.rows_cleared += cleared.len();
            debug!(rows = ?cleared.as_slice(), reward, score = self.score, "rows cleared");
        } else {
            debug!(kind = ?piece.kind, row = piece.row, col = piece.col, "piece locked");
        }

        // Soft drop must be pressed again after every lock.
        self.held.down = false;
        self.das.reset();

        self.spawn_next(out);
    }

    fn spawn_next(&mut self, out: &mut FrameOutcome) {
        let kind = self.source.next_kind();
        match ActivePiece::spawn(kind, &self.board) {
            Ok(piece) => {
                self.piece = Some(piece);
                out.piece_changed = true;
            }
            Err(blocked) => {
                info!(%blocked, score = self.score, lines = self.lines, "game over");
                self.piece = None;
                out.piece_changed = true;
                self.set_status(GameStatus::GameOver, out);
            }
        }
    }

    fn set_status(&mut self, status: GameStatus, out: &mut FrameOutcome) {
        if self.status == status {
            return;
        }
        info!(from = ?self.status, to = ?status, "status changed");
        self.status = status;
        out.status_changed = true;
    }
}

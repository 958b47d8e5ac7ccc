//! Active piece controller
//!
//! Owns the single falling piece between spawn and lock. Every move is checked
//! against the board and silently absorbed when it would collide or leave the
//! grid. Locking consumes the piece, so a dead piece cannot be moved again.

use thiserror::Error;

use crate::board::Board;
use crate::pieces::{get_shape, PieceShape};
use crate::types::{PieceKind, Rotation};

/// Row of the piece origin at spawn
pub const SPAWN_ROW: i8 = 0;

/// Column of the piece origin at spawn
pub const SPAWN_COL: i8 = 3;

/// A new piece could not be placed at the spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("spawn point blocked for {kind:?} piece")]
pub struct SpawnBlocked {
    pub kind: PieceKind,
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// Place a new piece at the spawn point.
    pub fn spawn(kind: PieceKind, board: &Board) -> Result<Self, SpawnBlocked> {
        let piece = Self {
            kind,
            rotation: Rotation::North,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        };
        if piece.fits(board, 0, 0, piece.rotation) {
            Ok(piece)
        } else {
            Err(SpawnBlocked { kind })
        }
    }

    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute (row, col) of every mino.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    fn fits(&self, board: &Board, dr: i8, dc: i8, rotation: Rotation) -> bool {
        get_shape(self.kind, rotation)
            .iter()
            .all(|&(r, c)| board.is_open(self.row + r + dr, self.col + c + dc))
    }

    fn shift(&mut self, board: &Board, dr: i8, dc: i8) -> bool {
        if !self.fits(board, dr, dc, self.rotation) {
            return false;
        }
        self.row += dr;
        self.col += dc;
        true
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(board, 0, -1)
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(board, 0, 1)
    }

    pub fn move_down(&mut self, board: &Board) -> bool {
        self.shift(board, 1, 0)
    }

    /// Advance to the next rotation state in place; no-op on collision.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let next = self.rotation.next();
        if !self.fits(board, 0, 0, next) {
            return false;
        }
        self.rotation = next;
        true
    }

    /// True iff one more row down would collide with the floor or locked cells.
    pub fn should_lock(&self, board: &Board) -> bool {
        !self.fits(board, 1, 0, self.rotation)
    }

    /// Commit every mino into the board as locked material.
    pub fn lock(self, board: &mut Board) {
        for (row, col) in self.cells() {
            if Board::contains(row, col) {
                board.fill(row as usize, col as usize, self.kind);
            }
        }
    }
}

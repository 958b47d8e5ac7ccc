//! ViewModel: the terminal side of the core `Renderer` contract.
//!
//! The game loop pushes changes in; the frame pump pulls a dirty flag out and
//! repaints only when something changed.

use crate::core::{ActivePiece, Board, Renderer};
use crate::types::{Cell, PieceKind, COLUMNS, ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    grid: [[Cell; COLUMNS]; ROWS],
    piece: Option<(PieceKind, [(i8, i8); 4])>,
    score: u32,
    level: u8,
    status: String,
    dirty: bool,
}

impl ViewModel {
    pub fn new(level: u8) -> Self {
        Self {
            grid: [[None; COLUMNS]; ROWS],
            piece: None,
            score: 0,
            level,
            status: String::new(),
            dirty: true,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Kind and absolute (row, col) cells of the falling piece.
    pub fn piece(&self) -> Option<(PieceKind, [(i8, i8); 4])> {
        self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns whether a repaint is due and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Request a repaint without any model change (resize).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Renderer for ViewModel {
    fn draw_board(&mut self, board: &Board) {
        for (row, cells) in self.grid.iter_mut().enumerate() {
            cells.copy_from_slice(board.row(row));
        }
        self.dirty = true;
    }

    fn draw_piece(&mut self, piece: Option<&ActivePiece>) {
        self.piece = piece.map(|p| (p.kind, p.cells()));
        self.dirty = true;
    }

    fn show_score(&mut self, score: u32) {
        self.score = score;
        self.dirty = true;
    }

    fn show_status(&mut self, text: &str) {
        if self.status != text {
            self.status.clear();
            self.status.push_str(text);
            self.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_copy_and_dirty_flag() {
        let mut vm = ViewModel::new(0);
        assert!(vm.take_dirty());
        assert!(!vm.take_dirty());

        let mut board = Board::new();
        board.fill(19, 0, PieceKind::Z);
        vm.draw_board(&board);
        assert!(vm.take_dirty());
        assert_eq!(vm.cell(19, 0), Some(PieceKind::Z));
        assert_eq!(vm.cell(0, 0), None);
    }

    #[test]
    fn test_same_status_is_not_dirty() {
        let mut vm = ViewModel::new(0);
        vm.show_status("Paused");
        vm.take_dirty();
        vm.show_status("Paused");
        assert!(!vm.take_dirty());
        vm.show_status("Game over!");
        assert!(vm.take_dirty());
    }
}

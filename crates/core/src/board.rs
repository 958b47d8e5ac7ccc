//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell is vacant or holds a locked piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, COLUMNS, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = ROWS * COLUMNS;

/// Row indices returned by a full-row scan, ascending.
pub type FullRows = ArrayVec<usize, ROWS>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new all-vacant board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        row * COLUMNS + col
    }

    /// Whether a signed position lies on the board.
    pub fn contains(row: i8, col: i8) -> bool {
        row >= 0 && (row as usize) < ROWS && col >= 0 && (col as usize) < COLUMNS
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }

    /// Cell at (row, col). Panics if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    /// Whether the cell at (row, col) holds no locked material.
    ///
    /// Panics if out of bounds; callers test bounds with [`Board::contains`].
    pub fn is_cell_vacant(&self, row: usize, col: usize) -> bool {
        self.cells[Self::index(row, col)].is_none()
    }

    /// Whether a signed position is on the board and vacant.
    pub fn is_open(&self, row: i8, col: i8) -> bool {
        Self::contains(row, col) && self.is_cell_vacant(row as usize, col as usize)
    }

    /// Overwrite a single cell. The caller guarantees the position is legal.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::index(row, col)] = cell;
    }

    /// Lock a single cell with the given piece kind.
    pub fn fill(&mut self, row: usize, col: usize, kind: PieceKind) {
        self.set_cell(row, col, Some(kind));
    }

    /// Check if a row has no vacant cell
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * COLUMNS;
        &self.cells[start..start + COLUMNS]
    }

    /// Indices of every full row, scanned top to bottom once.
    pub fn find_full_rows(&self) -> FullRows {
        (0..ROWS).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Remove `row` by shifting every row above it down by one, then vacate row 0.
    ///
    /// Rows below `row` are untouched.
    pub fn collapse_row(&mut self, row: usize) {
        for y in (1..=row).rev() {
            let src = (y - 1) * COLUMNS;
            self.cells.copy_within(src..src + COLUMNS, y * COLUMNS);
        }
        for cell in &mut self.cells[..COLUMNS] {
            *cell = None;
        }
    }

    /// Find and collapse every full row, returning the cleared indices.
    ///
    /// Collapsing row `r` only moves rows above `r`, so applying the
    /// collapses in ascending order keeps every later index valid.
    pub fn clear_full_rows(&mut self) -> FullRows {
        let rows = self.find_full_rows();
        for &row in &rows {
            self.collapse_row(row);
        }
        rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Vacate every cell
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Build a board from rows of text, bottom-aligned.
    ///
    /// `.` is vacant and any other character is locked material. Rows missing
    /// at the top are vacant. Intended for tests and fixtures.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = ROWS.saturating_sub(rows.len());
        for (i, line) in rows.iter().take(ROWS).enumerate() {
            for (col, ch) in line.chars().take(COLUMNS).enumerate() {
                if ch != '.' {
                    board.fill(offset + i, col, PieceKind::I);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), 0);
        assert_eq!(Board::index(0, 9), 9);
        assert_eq!(Board::index(1, 0), 10);
        assert_eq!(Board::index(19, 9), 199);
    }

    #[test]
    fn test_contains() {
        assert!(Board::contains(0, 0));
        assert!(Board::contains(19, 9));
        assert!(!Board::contains(-1, 0));
        assert!(!Board::contains(0, -1));
        assert!(!Board::contains(20, 0));
        assert!(!Board::contains(0, 10));
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();
        board.fill(0, 0, PieceKind::I);
        board.fill(10, 5, PieceKind::T);

        assert_eq!(board.cell(0, 0), Some(PieceKind::I));
        assert_eq!(board.cell(10, 5), Some(PieceKind::T));
        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_from_rows_is_bottom_aligned() {
        let board = Board::from_rows(&["#.........", "##########"]);
        assert!(board.is_row_full(19));
        assert!(!board.is_cell_vacant(18, 0));
        assert!(board.is_cell_vacant(18, 1));
        assert!(board.is_cell_vacant(17, 0));
    }

    #[test]
    fn test_collapse_top_row_only_vacates_it() {
        let mut board = Board::new();
        for col in 0..COLUMNS {
            board.fill(0, col, PieceKind::O);
        }
        board.fill(5, 5, PieceKind::S);

        board.collapse_row(0);

        assert!(board.row(0).iter().all(|c| c.is_none()));
        assert_eq!(board.cell(5, 5), Some(PieceKind::S));
    }
}

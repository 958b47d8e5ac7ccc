//! Board tests - full-row detection and collapse

use tetris_trainer::core::Board;
use tetris_trainer::types::{PieceKind, COLUMNS, ROWS};

fn fill_row(board: &mut Board, row: usize) {
    for col in 0..COLUMNS {
        board.fill(row, col, PieceKind::I);
    }
}

#[test]
fn test_board_new_is_vacant() {
    let board = Board::new();
    assert_eq!(board.rows(), ROWS);
    assert_eq!(board.columns(), COLUMNS);
    assert!(board.cells().iter().all(|cell| cell.is_none()));
    assert!(board.find_full_rows().is_empty());
}

#[test]
fn test_is_open_rejects_off_board_positions() {
    let board = Board::new();
    assert!(board.is_open(0, 0));
    assert!(board.is_open(19, 9));
    assert!(!board.is_open(-1, 0));
    assert!(!board.is_open(0, -1));
    assert!(!board.is_open(20, 0));
    assert!(!board.is_open(0, 10));
}

#[test]
fn test_row_with_one_gap_is_not_full() {
    let board = Board::from_rows(&["#########."]);
    assert!(!board.is_row_full(19));
    assert!(board.find_full_rows().is_empty());
}

#[test]
fn test_find_full_rows_ascending() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    fill_row(&mut board, 5);
    fill_row(&mut board, 12);
    assert_eq!(board.find_full_rows().as_slice(), &[5, 12, 19]);
}

#[test]
fn test_clear_bottom_row_shifts_everything_down() {
    let mut board = Board::from_rows(&["#.........", "##########"]);
    board.fill(18, 9, PieceKind::T);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);
    assert_eq!(board.cell(19, 0), Some(PieceKind::I));
    assert_eq!(board.cell(19, 9), Some(PieceKind::T));
    assert!(board.row(18).iter().all(|cell| cell.is_none()));
    assert!(board.row(0).iter().all(|cell| cell.is_none()));
}

#[test]
fn test_clear_non_adjacent_rows() {
    // Rows 17 and 19 full; markers on 16 and 18.
    let mut board = Board::from_rows(&["...#......", "##########", ".....#....", "##########"]);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[17, 19]);

    let occupied = |row: usize| -> Vec<usize> {
        (0..COLUMNS).filter(|&col| board.cell(row, col).is_some()).collect()
    };
    assert_eq!(occupied(19), vec![5]);
    assert_eq!(occupied(18), vec![3]);
    for row in 0..18 {
        assert!(occupied(row).is_empty(), "row {row} should be vacant");
    }
}

#[test]
fn test_clear_four_stacked_rows() {
    let mut board = Board::from_rows(&[
        "#.........",
        "##########",
        "##########",
        "##########",
        "##########",
    ]);
    assert_eq!(board.clear_full_rows().len(), 4);
    assert_eq!(board.cell(19, 0), Some(PieceKind::I));
    assert_eq!(board.cells().iter().filter(|cell| cell.is_some()).count(), 1);
}

#[test]
fn test_collapse_top_row_only_vacates_it() {
    let mut board = Board::new();
    fill_row(&mut board, 0);
    board.fill(1, 4, PieceKind::S);
    board.collapse_row(0);
    assert!(board.row(0).iter().all(|cell| cell.is_none()));
    assert_eq!(board.cell(1, 4), Some(PieceKind::S));
}

#[test]
fn test_clear_resets_every_cell() {
    let mut board = Board::from_rows(&["#.#.#", "#####"]);
    board.clear();
    assert_eq!(board, Board::new());
}

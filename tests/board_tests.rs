//! Board tests - occupancy, collision, freezing and line clearing

use tui_blockfall::core::{Board, Mask};
use tui_blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn mask(rows: &[&[u8]]) -> Mask {
    Mask::from_bits(rows).unwrap()
}

fn fill_row(board: &mut Board, y: i32) {
    for x in 0..board.width() as i32 {
        board.set(x, y, Some(PieceKind::T));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH as usize, BOARD_HEIGHT as usize);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);

    for y in 0..20 {
        for x in 0..10 {
            assert!(!board.is_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 20);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(10, 20);

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(10, 20);

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(10, 0, Some(PieceKind::T)));
    assert!(!board.set(0, 20, Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_outside_counts_as_occupied() {
    let board = Board::new(10, 20);
    assert!(board.is_occupied(-1, 5));
    assert!(board.is_occupied(10, 5));
    assert!(board.is_occupied(5, 20));
}

#[test]
fn test_collides_against_frozen_cells() {
    let mut board = Board::new(10, 20);
    let i = mask(&[&[1, 1, 1, 1]]);

    assert!(!board.collides(3, 10, &i));
    board.set(6, 10, Some(PieceKind::O));
    assert!(board.collides(3, 10, &i));
    assert!(!board.collides(3, 9, &i));

    // Vertical I in column 2 passes beside the frozen cell.
    assert!(!board.collides(2, 8, &i.rotate_cw()));
    assert!(board.collides(6, 8, &i.rotate_cw()));
}

#[test]
fn test_collides_at_every_edge() {
    let board = Board::new(10, 20);
    let o = mask(&[&[1, 1], &[1, 1]]);

    assert!(!board.collides(0, 0, &o));
    assert!(!board.collides(8, 18, &o));
    assert!(board.collides(9, 0, &o));
    assert!(board.collides(0, 19, &o));
    assert!(board.collides(-1, 0, &o));
    assert!(board.collides(0, -1, &o));
}

#[test]
fn test_collides_at_extreme_anchors() {
    let mut board = Board::new(10, 20);
    // T has no cell at its anchor, so every occupied cell sits past x.
    let t = mask(&[&[0, 1, 0], &[1, 1, 1]]);

    for (x, y) in [(i32::MAX, 0), (0, i32::MAX), (i32::MIN, 0), (i32::MAX, i32::MAX)] {
        assert!(board.collides(x, y, &t), "({x}, {y})");
    }

    board.freeze(i32::MAX, i32::MAX, &t, PieceKind::T);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_freeze_does_not_validate() {
    let mut board = Board::new(4, 4);
    board.set(1, 1, Some(PieceKind::I));

    // Caller responsibility: freezing over a frozen cell silently overwrites.
    board.freeze(0, 0, &mask(&[&[1, 1], &[1, 1]]), PieceKind::O);
    assert_eq!(board.get(1, 1), Some(Some(PieceKind::O)));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new(10, 20);
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5);
    assert!(board.is_row_full(5));

    for x in 0..9 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_board_clear_full_lines_bottom_two() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 18);
    fill_row(&mut board, 19);
    board.set(0, 17, Some(PieceKind::T));

    assert_eq!(board.clear_full_lines(), 2);

    // The marker dropped by two rows.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.height(), 20);
}

#[test]
fn test_board_clear_non_adjacent_lines_keeps_order() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 5);
    fill_row(&mut board, 10);
    fill_row(&mut board, 15);

    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    assert_eq!(board.clear_full_lines(), 3);

    // Each marker drops by the number of full rows beneath it.
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn test_board_clear_whole_board() {
    let mut board = Board::new(3, 5);
    for y in 0..5 {
        fill_row(&mut board, y);
    }
    assert_eq!(board.clear_full_lines(), 5);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board.rows().count(), 5);
}

#[test]
fn test_four_by_four_scenario_clears_everything() {
    let mut board = Board::new(4, 4);

    // Rows 0-2 pre-filled except one gap each.
    for (y, gap) in [(0, 1), (1, 3), (2, 0)] {
        for x in 0..4 {
            if x != gap {
                board.set(x, y, Some(PieceKind::Z));
            }
        }
    }
    assert_eq!(board.clear_full_lines(), 0);

    // Fill the gaps, then freeze a horizontal I into row 3.
    board.set(1, 0, Some(PieceKind::T));
    board.set(3, 1, Some(PieceKind::T));
    board.set(0, 2, Some(PieceKind::T));
    let i = mask(&[&[1, 1, 1, 1]]);
    assert!(!board.collides(0, 3, &i));
    board.freeze(0, 3, &i, PieceKind::I);

    assert_eq!(board.clear_full_lines(), 4);
    assert_eq!(board.filled_count(), 0);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 5);
    board.clear();
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_from_rows() {
    let board = Board::from_rows(vec![
        vec![None, Some(PieceKind::I)],
        vec![Some(PieceKind::O), None],
    ])
    .unwrap();
    assert_eq!(board.width(), 2);
    assert_eq!(board.height(), 2);
    assert!(board.is_occupied(1, 0));
    assert!(board.is_occupied(0, 1));

    assert!(Board::from_rows(vec![vec![None], vec![None, None]]).is_err());
}

//! Grid tests - collision and line clearing

use blockfall::core::{Grid, Piece};
use blockfall::types::{PieceKind, Rotation};
use proptest::prelude::*;

fn fill_row(grid: &mut Grid, y: i32) {
    for x in 0..grid.width() as i32 {
        grid.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(10, 20).unwrap();
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert!(grid.is_empty());
    assert_eq!(grid.highest_filled_row(), None);
    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(grid.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_grid_out_of_range_access() {
    let mut grid = Grid::new(10, 20).unwrap();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(10, 0), None);
    assert_eq!(grid.get(0, 20), None);
    assert!(!grid.set(0, -1, Some(PieceKind::T)));
    assert!(!grid.set(0, 20, Some(PieceKind::T)));
    assert!(grid.is_empty());
}

#[test]
fn test_row_access_above_top() {
    let grid = Grid::new(10, 20).unwrap();
    assert_eq!(grid.row(19).map(|row| row.len()), Some(10));
    assert_eq!(grid.row(20), None);
    assert_eq!(grid.row(usize::MAX), None);
    assert!(!grid.is_row_full(20));
}

#[test]
fn test_can_place_checks_every_mino() {
    let mut grid = Grid::new(10, 20).unwrap();
    let piece = Piece::new(PieceKind::T, 3, 5);
    assert!(grid.can_place(&piece));

    grid.set(5, 4, Some(PieceKind::Z));
    assert!(!grid.can_place(&piece));

    // past the walls and floor
    assert!(!grid.can_place(&Piece::new(PieceKind::T, -1, 5)));
    assert!(!grid.can_place(&Piece::new(PieceKind::T, 8, 5)));
    assert!(!grid.can_place(&Piece::new(PieceKind::T, 3, 0)));

    // entirely above the top
    assert!(grid.can_place(&Piece::new(PieceKind::T, 3, 30)));
}

#[test]
fn test_clear_rows_two_and_five() {
    let mut grid = Grid::new(10, 20).unwrap();
    fill_row(&mut grid, 2);
    fill_row(&mut grid, 5);
    for y in [0, 1, 3, 4, 6] {
        grid.set(y, y, Some(PieceKind::L));
    }

    assert_eq!(grid.full_rows(), vec![2, 5]);
    assert_eq!(grid.clear_rows(), 2);

    // below the lowest cleared row: untouched
    assert_eq!(grid.get(0, 0), Some(Some(PieceKind::L)));
    assert_eq!(grid.get(1, 1), Some(Some(PieceKind::L)));
    // between: down by one
    assert_eq!(grid.get(3, 2), Some(Some(PieceKind::L)));
    assert_eq!(grid.get(4, 3), Some(Some(PieceKind::L)));
    // above both: down by two
    assert_eq!(grid.get(6, 4), Some(Some(PieceKind::L)));

    assert_eq!(grid.filled_count(), 5);
    assert_eq!(grid.highest_filled_row(), Some(4));
    assert!(grid.full_rows().is_empty());
}

#[test]
fn test_clear_rows_without_full_rows_is_noop() {
    let mut grid = Grid::new(10, 20).unwrap();
    grid.set(3, 3, Some(PieceKind::S));
    let before = grid.clone();
    assert_eq!(grid.clear_rows(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_lock_writes_piece_kind() {
    let mut grid = Grid::new(10, 20).unwrap();
    let piece = Piece::new(PieceKind::J, 0, 1);
    grid.lock(&piece);
    for (x, y) in piece.cells() {
        assert_eq!(grid.get(x, y), Some(Some(PieceKind::J)));
    }
    assert_eq!(grid.filled_count(), 4);
}

#[test]
fn test_lock_above_top_is_partial() {
    let mut grid = Grid::new(10, 20).unwrap();
    let piece = Piece::new(PieceKind::I, 0, 21).with_rotation(Rotation::West);
    grid.lock(&piece);
    // rows 21, 20, 19, 18 -> only 19 and 18 stored
    assert_eq!(grid.filled_count(), 2);
    assert_eq!(grid.highest_filled_row(), Some(19));
}

#[test]
fn test_clear_resets_cells() {
    let mut grid = Grid::new(6, 6).unwrap();
    fill_row(&mut grid, 0);
    grid.clear();
    assert!(grid.is_empty());
    assert_eq!(grid.width(), 6);
}

proptest! {
    #[test]
    fn can_place_matches_cell_rule(
        filled in proptest::collection::vec((0i32..10, 0i32..20), 0..60),
        kind_idx in 0usize..7,
        rot in 0usize..4,
        x in -4i32..12,
        y in -4i32..26,
    ) {
        let mut grid = Grid::new(10, 20).unwrap();
        for &(fx, fy) in &filled {
            grid.set(fx, fy, Some(PieceKind::O));
        }
        let piece = Piece::new(PieceKind::ALL[kind_idx], x, y)
            .with_rotation(Rotation::from_index(rot));

        let expected = piece.cells().iter().all(|&(cx, cy)| {
            (0..10).contains(&cx) && cy >= 0 && (cy >= 20 || !filled.contains(&(cx, cy)))
        });
        prop_assert_eq!(grid.can_place(&piece), expected);
    }

    #[test]
    fn clear_rows_removes_exactly_full_rows(
        full in proptest::collection::btree_set(0i32..12, 0..6),
        scatter in proptest::collection::vec((0i32..8, 0i32..12), 0..30),
    ) {
        let mut grid = Grid::new(8, 12).unwrap();
        for &(x, y) in &scatter {
            // leave column 7 empty so scattered rows never complete
            if x < 7 && !full.contains(&y) {
                grid.set(x, y, Some(PieceKind::S));
            }
        }
        for &y in &full {
            fill_row(&mut grid, y);
        }
        let before = grid.filled_count();

        prop_assert_eq!(grid.full_rows().len(), full.len());
        prop_assert_eq!(grid.clear_rows(), full.len());
        prop_assert_eq!(grid.filled_count(), before - full.len() * 8);
        prop_assert!(grid.full_rows().is_empty());
    }
}

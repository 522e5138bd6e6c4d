//! SRS wall kicks
//!
//! Only the four clockwise transitions are stored. A counter-clockwise rotation from `r` to
//! `t` uses the clockwise entry for `t -> r` with every offset negated. Offsets are y-up.

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::types::{PieceKind, Rotation};

/// Ordered candidate offsets for one transition
pub type KickList = [(i32, i32); 5];

/// Clockwise kicks indexed by the starting rotation (0->1, 1->2, 2->3, 3->0)
pub type KickTable = [KickList; 4];

/// Shared by J, L, S, T and Z
pub const JLSTZ_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

pub const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// Candidate offsets for rotating `kind` out of `from`, in trial order
///
/// The O piece has a single `(0, 0)` candidate.
pub fn kick_candidates(kind: PieceKind, from: Rotation, clockwise: bool) -> Vec<(i32, i32)> {
    let table = match kind {
        PieceKind::O => return vec![(0, 0)],
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    };

    if clockwise {
        table[from.index()].to_vec()
    } else {
        let to = from.rotate_ccw();
        table[to.index()].iter().map(|&(dx, dy)| (-dx, -dy)).collect()
    }
}

/// Rotate with wall kicks
///
/// Applies the rotation, then tries each candidate offset in order and returns the first
/// placement the grid accepts. `None` means every candidate collided; the caller keeps the
/// original piece.
pub fn try_rotate(grid: &Grid, piece: &Piece, clockwise: bool) -> Option<Piece> {
    let target = if clockwise {
        piece.rotation.rotate_cw()
    } else {
        piece.rotation.rotate_ccw()
    };
    let rotated = piece.with_rotation(target);

    kick_candidates(piece.kind, piece.rotation, clockwise)
        .into_iter()
        .map(|(dx, dy)| rotated.moved(dx, dy))
        .find(|candidate| grid.can_place(candidate))
}

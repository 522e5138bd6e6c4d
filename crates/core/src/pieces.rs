//! Shape catalog and the `Piece` value
//!
//! Geometry is plain data: one table of four orientations per kind, each orientation four
//! mino offsets from the piece anchor. Offsets are y-up; the anchor is the top-left corner
//! of the SRS bounding box, so minos sit at `dy <= 0`.
//! Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rgb, Rotation, DEFAULT_WIDTH};

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (i32, i32);

/// Shape of a piece - 4 mino offsets from piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Orientation table, indexed by `[kind][rotation]`
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, -1), (1, -1), (2, -1), (3, -1)],
        [(2, 0), (2, -1), (2, -2), (2, -3)],
        [(0, -2), (1, -2), (2, -2), (3, -2)],
        [(1, 0), (1, -1), (1, -2), (1, -3)],
    ],
    // O
    [
        [(0, 0), (1, 0), (0, -1), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (1, -1)],
    ],
    // T
    [
        [(1, 0), (0, -1), (1, -1), (2, -1)],
        [(1, 0), (1, -1), (2, -1), (1, -2)],
        [(0, -1), (1, -1), (2, -1), (1, -2)],
        [(1, 0), (0, -1), (1, -1), (1, -2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, -1), (1, -1)],
        [(1, 0), (1, -1), (2, -1), (2, -2)],
        [(1, -1), (2, -1), (0, -2), (1, -2)],
        [(0, 0), (0, -1), (1, -1), (1, -2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, -1), (2, -1)],
        [(2, 0), (1, -1), (2, -1), (1, -2)],
        [(0, -1), (1, -1), (1, -2), (2, -2)],
        [(1, 0), (0, -1), (1, -1), (0, -2)],
    ],
    // J
    [
        [(0, 0), (0, -1), (1, -1), (2, -1)],
        [(1, 0), (2, 0), (1, -1), (1, -2)],
        [(0, -1), (1, -1), (2, -1), (2, -2)],
        [(1, 0), (1, -1), (0, -2), (1, -2)],
    ],
    // L
    [
        [(2, 0), (0, -1), (1, -1), (2, -1)],
        [(1, 0), (1, -1), (1, -2), (2, -2)],
        [(0, -1), (1, -1), (2, -1), (0, -2)],
        [(0, 0), (1, 0), (1, -1), (1, -2)],
    ],
];

fn table_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    }
}

/// Get the mino offsets for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[table_index(kind)][rotation.index()]
}

/// Display color of a piece kind
pub fn color_of(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb(0, 240, 240),
        PieceKind::O => Rgb(240, 240, 0),
        PieceKind::T => Rgb(160, 0, 240),
        PieceKind::S => Rgb(0, 240, 0),
        PieceKind::Z => Rgb(240, 0, 0),
        PieceKind::J => Rgb(0, 0, 240),
        PieceKind::L => Rgb(240, 160, 0),
    }
}

/// Spawn column of the anchor on a standard 10-wide board
pub fn spawn_offset(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::O => 4,
        _ => 3,
    }
}

/// A tetromino placed on the board
///
/// `Piece` is a value: moving or rotating produces a new piece and leaves the original
/// untouched, so collision trials never have to be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
}

impl Piece {
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: Rotation::North,
        }
    }

    /// Piece at its spawn anchor for a board of the given size
    ///
    /// Boards wider or narrower than 10 shift the spawn column so the piece stays centred.
    pub fn spawn(kind: PieceKind, width: usize, height: usize) -> Self {
        let shift = (width as i32 - DEFAULT_WIDTH as i32) / 2;
        Self::new(kind, spawn_offset(kind) + shift, height as i32 - 1)
    }

    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn with_rotation(&self, rotation: Rotation) -> Self {
        Self { rotation, ..*self }
    }

    pub fn color(&self) -> Rgb {
        color_of(self.kind)
    }
}

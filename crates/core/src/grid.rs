//! Grid module - the playfield cell storage
//!
//! Cells are stored row-major in a flat vector, row 0 at the bottom.
//! Coordinates: (x, y) where x ranges 0..width (left to right) and y ranges 0..height
//! (bottom to top). Everything left, right or below the grid is solid; everything above
//! the top row is open air, which is where pieces spawn and may briefly live.

use crate::config::{check_dimensions, ConfigError};
use crate::pieces::Piece;
use crate::types::Cell;

/// The playfield - `width` columns x `height` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid, rejecting boards too small to play on
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y); `None` when outside the stored rows and columns
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); out-of-range writes are ignored and return false
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a mino may occupy (x, y)
    ///
    /// Walls and the floor are closed, space above the top row is always open.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.width || y < 0 {
            return false;
        }
        if y as usize >= self.height {
            return true;
        }
        matches!(self.get(x, y), Some(None))
    }

    /// True iff every mino of the piece is on an open cell
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(x, y)| self.is_open(x, y))
    }

    /// Write the piece into the grid; minos above the top row are dropped
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Cells of one row, left to right; `None` above the top row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Indices of completely filled rows, bottom to top
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove every full row and compact the rest downwards
    ///
    /// Surviving rows keep their relative order; the vacated rows at the top become empty.
    /// Returns the number of rows removed.
    pub fn clear_rows(&mut self) -> usize {
        let width = self.width;
        let mut write_y = 0;
        let mut cleared = 0;

        for read_y in 0..self.height {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
            write_y += 1;
        }

        for cell in &mut self.cells[write_y * width..] {
            *cell = None;
        }

        cleared
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Topmost row holding at least one filled cell
    pub fn highest_filled_row(&self) -> Option<usize> {
        self.cells
            .chunks(self.width)
            .rposition(|row| row.iter().any(|cell| cell.is_some()))
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell codes per row, top row first (0 = empty)
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .rev()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(0, |kind| kind.code()))
                    .collect()
            })
            .collect()
    }
}

//! Board module - the well of locked cells
//!
//! The well is a `width x height` grid stored as a flat row-major vector.
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing
//! downwards; row 0 is the top of the well (inside the invalid band).
//!
//! The board only knows about locked cells. The falling piece lives in
//! [`crate::GameState`] and is validated against the board with
//! [`Board::fits`] before any move is committed.

use crate::pieces::Piece;
use crate::types::{Cell, PieceKind};

/// The well: a fixed-size grid of empty or locked cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    #[inline(always)]
    fn row_range(&self, y: usize) -> std::ops::Range<usize> {
        let start = y * self.width as usize;
        start..start + self.width as usize
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Whether every cell of `piece` lies inside the well on an empty cell
    ///
    /// Pure: used speculatively for moves, rotations, kicks and the ghost.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece
            .shape()
            .cells()
            .all(|(dx, dy)| self.is_valid(piece.x + dx, piece.y + dy))
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[self.row_range(y)]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height as usize && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a row holds at least one block
    pub fn row_has_block(&self, y: usize) -> bool {
        y < self.height as usize && self.row(y).iter().any(|cell| cell.is_some())
    }

    /// Whether any of the topmost `rows` rows holds a locked block
    pub fn top_rows_occupied(&self, rows: u8) -> bool {
        (0..rows.min(self.height) as usize).any(|y| self.row_has_block(y))
    }

    /// Indices of full rows, top to bottom
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Clear all full rows and compact the rest downwards
    ///
    /// Scans bottom-up with a write cursor: every surviving row is copied to
    /// the lowest free slot, so rows below the lowest cleared row stay where
    /// they are and each surviving row drops by the number of cleared rows
    /// beneath it. Vacated rows at the top become empty.
    ///
    /// Returns the cleared row indices as they were before compaction, top to
    /// bottom.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared = Vec::new();
        let width = self.width as usize;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        let vacated = write_y * width;
        self.cells[..vacated].fill(None);

        cleared.reverse();
        cleared
    }

    /// Lock a piece into the board
    ///
    /// Returns false (and leaves the board untouched) if any cell is out of
    /// bounds or occupied.
    pub fn lock_piece(&mut self, piece: &Piece) -> bool {
        if !self.fits(piece) {
            return false;
        }

        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill a whole row with `kind` (test and scripting helper)
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y < self.height as usize {
            let range = self.row_range(y);
            self.cells[range].fill(Some(kind));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

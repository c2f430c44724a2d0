//! Board module - the grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked there. Storage is a flat array so the board is allocation-free.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..19
//! (**floor to top**).

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_COLUMNS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_COLUMNS as usize) * (BOARD_ROWS as usize);

const WIDTH: usize = BOARD_COLUMNS as usize;
const HEIGHT: usize = BOARD_ROWS as usize;

/// Row-major `u8` view of the board (0 = empty, else [`PieceKind::index`]).
pub type CellGrid = [[u8; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_COLUMNS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_COLUMNS
    }

    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Cell value as stored in snapshots: 0 for empty or out of bounds.
    pub fn value(&self, x: i8, y: i8) -> u8 {
        match self.get(x, y) {
            Some(Some(kind)) => kind.index(),
            _ => 0,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Number of filled cells in a row.
    pub fn row_fill(&self, y: usize) -> usize {
        if y >= HEIGHT {
            return 0;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Remove row `y`: every row above moves down by one and the top row is emptied.
    pub fn remove_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        // copy_within handles the overlapping ranges
        self.cells.copy_within((y + 1) * WIDTH.., y * WIDTH);
        self.cells[(HEIGHT - 1) * WIDTH..].fill(None);
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans from the floor up. After a removal the same row index is examined
    /// again, because the row above has just moved into it; this counts stacked
    /// full rows in a single pass.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = 0;
        while y < HEIGHT {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Write a piece's occupied cells into the board.
    ///
    /// Cells outside the grid are dropped silently. Returns how many cells were written.
    pub fn lock_piece(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.board_cells() {
            if self.set(x, y, Some(piece.kind)) {
                written += 1;
            }
        }
        written
    }

    /// Fill a whole row with `kind`, optionally leaving one column empty.
    pub fn fill_row(&mut self, y: i8, kind: PieceKind, hole: Option<i8>) {
        for x in 0..BOARD_COLUMNS as i8 {
            let cell = if hole == Some(x) { None } else { Some(kind) };
            self.set(x, y, cell);
        }
    }

    /// Copy the board into a `u8` grid indexed `[y][x]`.
    pub fn write_u8_grid(&self, out: &mut CellGrid) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * WIDTH + x].map_or(0, |kind| kind.index());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

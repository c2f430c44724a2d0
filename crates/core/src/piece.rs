//! Piece module - shape matrices and the movable piece value
//!
//! A shape is a rectangular occupancy matrix of at most 4x4 cells stored inline,
//! so pieces are `Copy` and rotating never allocates.
//! Matrix row `r`, column `c` lands on board cell `(x + c, y + r)`; row 0 of the
//! matrix is the lowest row of the piece because board row 0 is the floor.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_COLUMNS, BOARD_ROWS, MAX_SHAPE_SIZE};

/// Board-relative offsets of the occupied cells of a shape, as `(column, row)`.
pub type ShapeCells = ArrayVec<(i8, i8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Rectangular occupancy matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    grid: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from matrix rows (non-zero = occupied).
    ///
    /// # Panics
    ///
    /// Shapes are fixed internal constants, so malformed input is a programming
    /// error: empty, ragged, larger than 4x4 or fully empty matrices panic.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "shape must have at least one row");
        assert!(rows.len() <= MAX_SHAPE_SIZE, "shape has too many rows");

        let cols = rows[0].as_ref().len();
        assert!(cols > 0, "shape must have at least one column");
        assert!(cols <= MAX_SHAPE_SIZE, "shape has too many columns");

        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "shape rows must all have the same length");
            for (c, &v) in row.iter().enumerate() {
                grid[r][c] = v != 0;
            }
        }

        let shape = Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            grid,
        };
        assert!(shape.cell_count() > 0, "shape must occupy at least one cell");
        shape
    }

    /// Canonical spawn shape for a piece kind.
    pub fn base(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[[1u8, 1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[[1u8, 1, 1], [1, 0, 0]]),
            PieceKind::J => Self::from_rows(&[[1u8, 1, 1], [0, 0, 1]]),
            PieceKind::O => Self::from_rows(&[[1u8, 1], [1, 1]]),
            PieceKind::S => Self::from_rows(&[[1u8, 1, 0], [0, 1, 1]]),
            PieceKind::Z => Self::from_rows(&[[0u8, 1, 1], [1, 1, 0]]),
            PieceKind::T => Self::from_rows(&[[1u8, 1, 1], [0, 1, 0]]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether matrix cell `(row, col)` is occupied. Out-of-range cells are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.grid[row][col]
    }

    /// Occupied offsets as `(column, row)`, row-major from the bottom row.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.grid[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }

    pub fn cell_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v).count()
    }

    /// Quarter turn: transpose and reverse, `out[c][rows - 1 - r] = self[r][c]`.
    ///
    /// The result has swapped dimensions.
    pub fn rotated(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..rows {
            for c in 0..cols {
                grid[c][rows - 1 - r] = self.grid[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            grid,
        }
    }
}

/// A movable piece: shape, anchor and kind.
///
/// `(x, y)` is the board position of matrix cell `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` in its base orientation at the spawn anchor.
    ///
    /// The spawn anchor centers the shape horizontally and puts its top row on the
    /// board's top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::base(kind);
        let (x, y) = spawn_anchor(&shape);
        Self { kind, shape, x, y }
    }

    /// Same piece translated by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece placed at `(x, y)`.
    pub fn at(&self, x: i8, y: i8) -> Self {
        Self { x, y, ..*self }
    }

    /// Board coordinates of every occupied cell.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }
}

/// Spawn anchor for a shape: horizontally centered, top aligned with the top row.
pub fn spawn_anchor(shape: &Shape) -> (i8, i8) {
    let x = (BOARD_COLUMNS / 2) as i8 - (shape.cols() / 2) as i8;
    let y = BOARD_ROWS as i8 - shape.rows() as i8;
    (x, y)
}
